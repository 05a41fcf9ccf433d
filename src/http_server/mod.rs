//! # catalogd HTTP Server Module
//!
//! Thin axum transport over the query pipeline.
//!
//! # Endpoints
//!
//! - `GET /api/products` - filtered, sorted, paginated catalog view
//! - `GET /api/health` - loaded record count and a timestamp

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use product_routes::{CatalogState, ProductsResponse};
pub use server::HttpServer;
