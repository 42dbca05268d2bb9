//! Handler tests for the catalog domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They drive ONLY the catalog router, not the full application with
//! health endpoints, Swagger UI, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::*;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn seeded_router() -> axum::Router {
    let deps = Arc::new(create_catalog_dependencies(CatalogOptions {
        use_memory: true,
        with_test_data: true,
        ..Default::default()
    }));
    handlers::router(deps)
}

async fn get(app: axum::Router, uri: &str) -> axum::http::Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_catalog_returns_all_fixture_products() {
    let response = get(seeded_router(), "/catalog").await;

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 52);
    assert_eq!(products[0].id, "1");
    assert_eq!(products[51].id, "52");
}

#[tokio::test]
async fn test_get_product_returns_200() {
    let response = get(seeded_router(), "/products/1").await;

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, "1");
    assert_eq!(product.name, "TechPro X1 Smartphone");
    assert_eq!(product.price_cents, 79999);
}

#[tokio::test]
async fn test_get_product_returns_404_for_missing() {
    let response = get(seeded_router(), "/products/99999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_get_product_returns_400_for_whitespace_id() {
    // "%20%20" decodes to two spaces, which the use-case rejects
    let response = get(seeded_router(), "/products/%20%20").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product ID is required");
}

#[tokio::test]
async fn test_get_product_trims_surrounding_whitespace() {
    let response = get(seeded_router(), "/products/%2042%20").await;

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, "42");
}

#[tokio::test]
async fn test_categories_endpoint() {
    let response = get(seeded_router(), "/categories").await;

    assert_eq!(response.status(), StatusCode::OK);

    let categories: Vec<Category> = json_body(response.into_body()).await;
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0].name, "Electronics");
}

#[tokio::test]
async fn test_brands_endpoint() {
    let response = get(seeded_router(), "/brands").await;

    assert_eq!(response.status(), StatusCode::OK);

    let brands: Vec<Brand> = json_body(response.into_body()).await;
    assert_eq!(brands.len(), 8);
    assert_eq!(brands[7].name, "UrbanStyle");
}

#[tokio::test]
async fn test_reviews_for_one_product() {
    let response = get(seeded_router(), "/reviews?product_id=1").await;

    assert_eq!(response.status(), StatusCode::OK);

    let reviews: Vec<Review> = json_body(response.into_body()).await;
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r.product_id == "1"));
}

#[tokio::test]
async fn test_reviews_without_filter_lists_all() {
    let response = get(seeded_router(), "/reviews").await;

    assert_eq!(response.status(), StatusCode::OK);

    let reviews: Vec<Review> = json_body(response.into_body()).await;
    assert_eq!(reviews.len(), 5);
}

#[tokio::test]
async fn test_reviews_with_blank_product_id_is_400() {
    let response = get(seeded_router(), "/reviews?product_id=%20").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product ID is required");
}

#[tokio::test]
async fn test_unseeded_router_serves_empty_catalog() {
    let deps = Arc::new(create_catalog_dependencies(CatalogOptions {
        use_memory: true,
        with_test_data: false,
        ..Default::default()
    }));
    let response = get(handlers::router(deps), "/catalog").await;

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}
