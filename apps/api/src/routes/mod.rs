pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/predict", post(handlers::handle_predict))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Endpoint tests — full router with the real extractor and bundled dictionary
// ────────────────────────────────────────────────────────────────────────────
