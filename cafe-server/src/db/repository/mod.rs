//! Repository Module
//!
//! The [`CafeStore`] trait is the persistence seam handlers depend on;
//! [`SqliteCafeStore`] implements it over the `cafe` table.

pub mod cafe;

pub use cafe::SqliteCafeStore;

use async_trait::async_trait;
use shared::models::{Cafe, CafeCreate};
use thiserror::Error;

use crate::utils::{AppError, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::CafeNotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::CafeNameExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Cafe persistence
///
/// Every mutation is committed before the call returns.
#[async_trait]
pub trait CafeStore: Send + Sync {
    /// Insert a new cafe; fails with [`RepoError::Duplicate`] if the name is taken
    async fn create(&self, data: CafeCreate) -> RepoResult<Cafe>;

    /// All cafes in insertion order
    async fn list_all(&self) -> RepoResult<Vec<Cafe>>;

    /// Remove a cafe; fails with [`RepoError::NotFound`] if no row has that id
    async fn delete_by_id(&self, id: i64) -> RepoResult<()>;
}
