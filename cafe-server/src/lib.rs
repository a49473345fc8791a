//! Cafe Server - café catalogue web application
//!
//! Lists cafes, accepts new submissions through an HTML form and deletes
//! entries by id. Records live in a single SQLite table.
//!
//! # Module layout
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # config, state, server
//! ├── db/            # SQLite pool, migrations, cafe store
//! ├── form/          # submission form and validation rules
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # errors, logging
//! ├── csrf.rs        # signed form tokens
//! └── render.rs      # HTML templates
//! ```

pub mod api;
pub mod core;
pub mod csrf;
pub mod db;
pub mod form;
pub mod render;
pub mod utils;

// Re-export public types
pub use core::{AppState, Config, ConfigError, Server};
pub use csrf::{CsrfError, CsrfGuard};
pub use db::DbService;
pub use db::repository::{CafeStore, RepoError, RepoResult, SqliteCafeStore};
pub use form::{CafeForm, FieldErrors};
pub use render::Renderer;
pub use utils::{AppError, AppResult, ServerError};

// Re-export logger functions
pub use utils::logger::init_logger;

/// Load `.env`, read the configuration and initialize logging
///
/// The logger is installed even when the configuration is rejected, so the
/// caller can report the error through `tracing`.
pub fn setup_environment() -> Result<Config, ConfigError> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger(config.as_ref().is_ok_and(Config::is_production));
    config
}
