//! Error category classification

use super::codes::ErrorCode;

/// Error category, derived from the code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Cafe errors (6xxx)
    Cafe,
    /// Security errors (7xxx)
    Security,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            6000..7000 => Self::Cafe,
            7000..8000 => Self::Security,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Category this code belongs to
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCode::CafeNameExists.category(), ErrorCategory::Cafe);
        assert_eq!(ErrorCode::CsrfTokenInvalid.category(), ErrorCategory::Security);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }
}
