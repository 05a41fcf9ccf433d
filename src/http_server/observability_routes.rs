//! Observability HTTP Routes
//!
//! Liveness and inspection: how many records are loaded, and when the
//! answer was produced.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::product_routes::CatalogState;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub products_loaded: usize,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub environment: String,
    pub version: String,
}

/// Health check route
pub fn health_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<CatalogState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        products_loaded: state.store().len(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: state.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
