//! Error codes for the cafe catalogue
//!
//! Error codes are organized by category:
//! - 6xxx: Cafe errors
//! - 7xxx: Security errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 6xxx: Cafe ====================
    /// No cafe with the given id
    CafeNotFound = 6001,
    /// A cafe with the same name exists
    CafeNameExists = 6002,

    // ==================== 7xxx: Security ====================
    /// CSRF token missing from a mutating form
    CsrfTokenMissing = 7001,
    /// CSRF token failed verification or expired
    CsrfTokenInvalid = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Template rendering error
    RenderError = 9004,
}

impl ErrorCode {
    /// Numeric value of the code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::CafeNotFound => "Cafe not found",
            Self::CafeNameExists => "A cafe with this name already exists",
            Self::CsrfTokenMissing => "The CSRF token is missing",
            Self::CsrfTokenInvalid => "The CSRF token is invalid or has expired",
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
            Self::RenderError => "Failed to render page",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::CafeNotFound.code(), 6001);
        assert_eq!(ErrorCode::CafeNameExists.code(), 6002);
        assert_eq!(ErrorCode::CsrfTokenInvalid.code(), 7002);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::CafeNotFound.to_string(), "E6001");
        assert_eq!(ErrorCode::ConfigError.to_string(), "E9003");
    }
}
