//! Cafe pages

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/add", get(handler::add_form).post(handler::add))
        // POST only; a GET answers 405
        .route("/delete/{id}", post(handler::delete))
}
