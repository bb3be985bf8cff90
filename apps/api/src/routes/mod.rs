pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::conversion::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_convert),
        )
        .route("/health", get(health::health_handler))
        // BRF API
        .route("/api/v1/brf/convert", post(handlers::handle_convert))
        .route("/api/v1/brf/preview", post(handlers::handle_preview))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
