//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use crate::core::{AppState, Config};
use crate::utils::{AppError, AppResult};

/// HTTP Server
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    pub fn with_state(config: Config, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind the listener and serve until Ctrl-C
    pub async fn run(self) -> AppResult<()> {
        let app = crate::api::build_app(self.state);

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::config(format!("Failed to bind {addr}: {e}")))?;
        tracing::info!("cafe-server listening on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        tracing::info!("cafe-server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Shutting down..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C, graceful shutdown disabled: {e}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_resolves_shutdown() {
        let signal = async { Ok(()) };
        let done = tokio::time::timeout(Duration::from_millis(100), wait_for_shutdown(signal)).await;
        assert!(done.is_ok());
    }

    #[tokio::test]
    async fn test_failed_signal_keeps_serving() {
        let failing = async { Err(std::io::Error::other("no signal handler")) };
        let done = tokio::time::timeout(Duration::from_millis(100), wait_for_shutdown(failing)).await;
        assert!(done.is_err());
    }
}
