//! HTTP routes
//!
//! | Method | Path           | Handler                  |
//! |--------|----------------|--------------------------|
//! | GET    | `/`            | catalogue page           |
//! | GET    | `/add`         | empty submission form    |
//! | POST   | `/add`         | validate and insert      |
//! | POST   | `/delete/{id}` | delete then redirect     |
//! | GET    | `/health`      | liveness check (JSON)    |

pub mod cafes;
pub mod health;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

/// Build the application router with middleware
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(cafes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
