//! HTTP API Tests
//!
//! Drives the axum router in-process with `oneshot`; no socket is bound.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use catalogd::catalog::{CatalogStore, MemorySource, Record};
use catalogd::http_server::{CatalogState, HttpServer, HttpServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn router_with(records: Vec<Record>) -> Router {
    let store = Arc::new(CatalogStore::open(MemorySource::new(records)));
    let state = Arc::new(CatalogState::new(store, "test"));
    HttpServer::build_router(&HttpServerConfig::default(), state)
}

fn sample_router() -> Router {
    let records = (1..=25)
        .map(|i| {
            Record::from_value(json!({
                "id": i,
                "title": format!("Item {}", i),
                "category": if i % 2 == 0 { "even" } else { "odd" },
                "price": i * 10,
                "rating": { "rate": (i % 5) as f64 + 0.5, "count": i }
            }))
            .unwrap()
        })
        .collect();
    router_with(records)
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// /api/products
// =============================================================================

#[tokio::test]
async fn test_default_envelope() {
    let (status, body) = get(sample_router(), "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 25);
    assert_eq!(body["skip"], 0);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pages"], 3);
    assert_eq!(body["products"].as_array().unwrap().len(), 10);
    assert_eq!(body["products"][0]["id"], 1);
}

#[tokio::test]
async fn test_filters_sort_and_page() {
    let (status, body) = get(
        sample_router(),
        "/api/products?category_eq=even&price_gte=100&sortBy=price&order=desc&limit=3&skip=3",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Even ids with price >= 100: 10, 12, ..., 24
    assert_eq!(body["total"], 8);
    assert_eq!(body["page"], 2);
    assert_eq!(body["pages"], 3);

    let ids: Vec<i64> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![18, 16, 14]);
}

#[tokio::test]
async fn test_url_encoded_search() {
    let (status, body) = get(sample_router(), "/api/products?q=item%2025").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["title"], "Item 25");
}

#[tokio::test]
async fn test_duplicate_key_last_wins() {
    let (_, body) = get(sample_router(), "/api/products?limit=2&limit=5").await;
    assert_eq!(body["limit"], 5);
}

#[tokio::test]
async fn test_records_pass_through_unchanged() {
    let (_, body) = get(sample_router(), "/api/products?id_eq=7").await;

    assert_eq!(
        body["products"][0],
        json!({
            "id": 7,
            "title": "Item 7",
            "category": "odd",
            "price": 70,
            "rating": { "rate": 2.5, "count": 7 }
        })
    );
}

#[tokio::test]
async fn test_empty_store_is_500() {
    let (status, body) = get(router_with(Vec::new()), "/api/products").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 500);
    assert!(body["error"].as_str().unwrap().contains("No products available"));
}

#[tokio::test]
async fn test_no_match_is_200() {
    let (status, body) = get(sample_router(), "/api/products?title_like=shirt").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["pages"], 0);
    assert_eq!(body["products"], json!([]));
}

// =============================================================================
// /api/health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(sample_router(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["productsLoaded"], 25);
    assert_eq!(body["environment"], "test");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let response = sample_router()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/products")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = sample_router()
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
