//! HTTP handlers for the app catalog
//!
//! Handlers are thin: they pull the query string and the shared catalog out
//! of the request and hand both to the query processor.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::{AppRecord, QueryParams, QueryableStore, ValidationError};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QueryableStore>,
    pub config: Arc<ServerConfig>,
}

/// List apps matching the query
///
/// GET /apps?search={text}&sort={App|Rating}&genres={genre}
pub async fn list_apps(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<AppRecord>>, ValidationError> {
    let results = state
        .store
        .query(&params, state.config.filter_precedence)
        .inspect_err(|e| {
            tracing::warn!(code = e.error_code(), value = e.value(), "rejected apps query");
        })?;

    tracing::debug!(
        search = %params.search,
        sort = ?params.sort,
        genres = ?params.genres,
        count = results.len(),
        "apps query served"
    );

    Ok(Json(results))
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "playstore",
        "apps": state.store.len()
    }))
}
