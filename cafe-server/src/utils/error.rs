//! HTML error responses
//!
//! Page handlers return [`ServerError`], which wraps the shared [`AppError`]
//! and renders it as a small HTML page with the matching status code.
//! System errors (database, rendering, ...) are logged and replaced by a
//! generic message so internals never reach the browser.

use axum::response::{Html, IntoResponse, Response};
use minijinja::HtmlEscape;

use crate::csrf::CsrfError;
use crate::db::repository::RepoError;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

/// Error returned by page handlers
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ServerError(#[from] pub AppError);

impl From<RepoError> for ServerError {
    fn from(err: RepoError) -> Self {
        Self(err.into())
    }
}

impl From<CsrfError> for ServerError {
    fn from(err: CsrfError) -> Self {
        Self(err.into())
    }
}

impl From<minijinja::Error> for ServerError {
    fn from(err: minijinja::Error) -> Self {
        Self(AppError::with_message(ErrorCode::RenderError, err.to_string()))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = err.http_status();

        match err.code.category() {
            ErrorCategory::System => {
                tracing::error!(code = %err.code, message = %err.message, "System error occurred")
            }
            ErrorCategory::Security => {
                tracing::warn!(code = %err.code, message = %err.message, "Form token rejected")
            }
            ErrorCategory::Cafe => {
                tracing::debug!(code = %err.code, message = %err.message, "Request failed")
            }
        }

        let message = if err.is_public() {
            err.message.as_str()
        } else {
            err.code.message()
        };

        let body = format!(
            "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{status}</title></head>\n\
             <body>\n<h1>{status}</h1>\n<p>{}</p>\n<a href=\"/\">Back to all cafes</a>\n</body>\n</html>\n",
            HtmlEscape(message)
        );

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_status_follows_error_code() {
        let resp = ServerError(AppError::new(ErrorCode::CsrfTokenMissing)).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ServerError(AppError::database("database is locked")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_repo_not_found_maps_to_404() {
        let resp = ServerError::from(RepoError::NotFound("Cafe 9 not found".into())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_error_page_escapes_message() {
        use http_body_util::BodyExt;

        let err = AppError::with_message(ErrorCode::CafeNotFound, "<script>alert(1)</script>");
        let resp = ServerError(err).into_response();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("&lt;script&gt;alert(1)&lt;&#x2f;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn test_system_error_hides_detail() {
        use http_body_util::BodyExt;

        let resp = ServerError(AppError::database("no such table: cafe")).into_response();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("Database error"));
        assert!(!html.contains("no such table"));
    }
}
