//! Router assembly.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::handlers::{generate, health_check, index};

/// Creates the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/generate", post(generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
