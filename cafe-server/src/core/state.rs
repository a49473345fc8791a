//! Application state shared by all handlers

use std::sync::Arc;
use std::time::Duration;

use crate::core::Config;
use crate::csrf::CsrfGuard;
use crate::db::DbService;
use crate::db::repository::{CafeStore, SqliteCafeStore};
use crate::render::Renderer;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Shared application state
///
/// Cloned into every request; all fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Cafe record store
    pub store: Arc<dyn CafeStore>,
    /// Signs and verifies form tokens
    pub csrf: CsrfGuard,
    /// HTML templates
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(store: Arc<dyn CafeStore>, csrf: CsrfGuard, renderer: Renderer) -> Self {
        Self {
            store,
            csrf,
            renderer,
        }
    }

    /// Open the database, apply migrations and load templates
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_url).await?;
        let store = Arc::new(SqliteCafeStore::new(db.pool));

        let csrf = CsrfGuard::new(
            config.secret_key.as_bytes(),
            Duration::from_secs(config.csrf_time_limit_secs),
        )?;

        let renderer = Renderer::new().map_err(|e| {
            AppError::with_message(ErrorCode::RenderError, format!("Failed to load templates: {e}"))
        })?;

        Ok(Self::new(store, csrf, renderer))
    }
}
