//! HTTP adapter around the dispatch engine.
//!
//! Provides:
//! - `POST /productionplan`: dispatch request JSON in, production plan out
//! - `GET /health`: liveness probe

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::dispatch::Engine;

pub use types::ErrorResponse;

/// Immutable application state shared across all request handlers.
///
/// The engine is stateless, so no locks are needed.
pub struct AppState {
    /// Engine used for every request.
    pub engine: Engine,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/productionplan", post(handlers::post_production_plan))
        .route("/health", get(handlers::get_health))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind to `addr` or the
/// server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
