//! Router builder utilities for catalog routes

use crate::apps::handlers::{AppState, health_check, list_apps};
use axum::{Router, routing::get};

/// Build the catalog routes
///
/// - GET /apps - Filtered and sorted app listing
/// - GET /health, /healthz - Liveness check with catalog size
pub fn build_app_routes(state: AppState) -> Router {
    Router::new()
        .route("/apps", get(list_apps))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .with_state(state)
}
