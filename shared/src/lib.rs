//! Shared types for the cafe catalogue
//!
//! Domain models and the error model used by the server crate.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Cafe, CafeCreate, InvalidSeats, Seats};
