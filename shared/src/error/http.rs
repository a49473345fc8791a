//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::CafeNotFound => StatusCode::NOT_FOUND,

            // 422 Unprocessable Entity (form re-rendered with a field error)
            Self::CafeNameExists => StatusCode::UNPROCESSABLE_ENTITY,

            // 400 Bad Request
            Self::CsrfTokenMissing | Self::CsrfTokenInvalid => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError | Self::RenderError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cafe_statuses() {
        assert_eq!(ErrorCode::CafeNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::CafeNameExists.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_csrf_is_bad_request() {
        assert_eq!(
            ErrorCode::CsrfTokenMissing.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::CsrfTokenInvalid.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_system_errors_are_internal() {
        for code in [
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::ConfigError,
            ErrorCode::RenderError,
        ] {
            assert_eq!(code.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
