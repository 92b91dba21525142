//! Axum router configuration

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::handlers::{extract_get, extract_post, unknown_route};

/// Create the Axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // The extraction endpoint is the only recognized route
        .route("/extract", get(extract_get).post(extract_post))
        // Everything else is a 404, for any method
        .fallback(unknown_route)
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
