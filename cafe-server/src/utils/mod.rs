//! Utilities - errors and logging
//!
//! - [`AppError`] - application error (from shared::error)
//! - [`ServerError`] - HTML error response for page handlers
//! - logger setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ServerError};
