//! Data models
//!
//! Plain data structs shared between the store and the web layer.
//! Ids are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod cafe;

// Re-exports
pub use cafe::*;
