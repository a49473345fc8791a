//! Cafe Page Handlers

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::core::AppState;
use crate::db::repository::RepoError;
use crate::form::{CafeForm, CsrfForm, FieldErrors};
use crate::render::{AddFormView, FormValues};
use crate::utils::ServerError;

const DUPLICATE_NAME: &str = "A cafe with this name already exists.";

/// GET / - all cafes in insertion order
pub async fn list(State(state): State<AppState>) -> Result<Response, ServerError> {
    let cafes = state.store.list_all().await?;
    let html = state.renderer.render_list(&cafes, &state.csrf.issue())?;
    Ok(Html(html).into_response())
}

/// GET /add - empty submission form
pub async fn add_form(State(state): State<AppState>) -> Result<Response, ServerError> {
    let errors = FieldErrors::default();
    let view = AddFormView::new(FormValues::default(), &errors, state.csrf.issue());
    Ok(Html(state.renderer.render_add_form(&view)?).into_response())
}

/// POST /add - validate, insert and redirect to the list
///
/// A rejected submission re-renders the form with the entered values and
/// per-field messages under 422.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<CafeForm>,
) -> Result<Response, ServerError> {
    state.csrf.verify(form.csrf_token.as_deref())?;

    let payload = match form.validate_submission() {
        Ok(payload) => payload,
        Err(errors) => {
            tracing::debug!(fields = ?errors, "Cafe submission rejected");
            return rerender(&state, &form, &errors);
        }
    };

    match state.store.create(payload).await {
        Ok(cafe) => {
            tracing::info!(id = cafe.id, name = %cafe.name, "Cafe added");
            Ok(Redirect::to("/").into_response())
        }
        Err(RepoError::Duplicate(msg)) => {
            tracing::debug!("{msg}");
            let mut errors = FieldErrors::default();
            errors.add("name", DUPLICATE_NAME);
            rerender(&state, &form, &errors)
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /delete/{id} - remove a cafe and redirect to the list
///
/// An id that matches nothing is not an error; the list is shown unchanged.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CsrfForm>,
) -> Result<Response, ServerError> {
    state.csrf.verify(form.csrf_token.as_deref())?;

    match state.store.delete_by_id(id).await {
        Ok(()) => tracing::info!(id, "Cafe deleted"),
        Err(RepoError::NotFound(_)) => tracing::warn!(id, "Delete requested for unknown cafe"),
        Err(e) => return Err(e.into()),
    }
    Ok(Redirect::to("/").into_response())
}

fn rerender(state: &AppState, form: &CafeForm, errors: &FieldErrors) -> Result<Response, ServerError> {
    let view = AddFormView::new(FormValues::from(form), errors, state.csrf.issue());
    let html = state.renderer.render_add_form(&view)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
}
