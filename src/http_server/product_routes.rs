//! Product HTTP Routes
//!
//! `GET /products`: filtered, sorted, paginated view of the catalog.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::catalog::{CatalogStore, Record};
use crate::executor::{ExecutorError, QueryPipeline, ResultPage};

use super::errors::ApiError;

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub pipeline: QueryPipeline,
    /// Deployment environment name reported by the health check
    pub environment: String,
}

impl CatalogState {
    pub fn new(store: Arc<CatalogStore>, environment: impl Into<String>) -> Self {
        Self {
            pipeline: QueryPipeline::new(store),
            environment: environment.into(),
        }
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        self.pipeline.store()
    }
}

// ==================
// Response Types
// ==================

/// List response envelope
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Record>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
    pub page: usize,
    pub pages: usize,
}

impl From<ResultPage> for ProductsResponse {
    fn from(page: ResultPage) -> Self {
        Self {
            products: page.records,
            total: page.total,
            skip: page.offset,
            limit: page.limit,
            page: page.page_index,
            pages: page.page_count,
        }
    }
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler))
        .with_state(state)
}

async fn list_products_handler(
    State(state): State<Arc<CatalogState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let pipeline = state.pipeline.clone();

    // The reload path reads from disk, so keep the whole pipeline off the
    // async workers
    let page = tokio::task::spawn_blocking(move || pipeline.execute_params(params))
        .await
        .map_err(|e| ExecutorError::internal(format!("query task failed: {}", e)))??;

    Ok(Json(ProductsResponse::from(page)))
}
