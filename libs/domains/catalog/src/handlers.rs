//! HTTP handlers for the catalog API

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{AppError, ErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::dependencies::CatalogDependencies;
use crate::models::{Brand, Category, Product, Review};

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(list_catalog, get_product, list_categories, list_brands, list_reviews),
    components(schemas(Product, Category, Brand, Review, ErrorResponse)),
    tags(
        (name = "Catalog", description = "Read-only storefront catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router(deps: Arc<CatalogDependencies>) -> Router {
    Router::new()
        .route("/catalog", get(list_catalog))
        .route("/products/{id}", get(get_product))
        .route("/categories", get(list_categories))
        .route("/brands", get(list_brands))
        .route("/reviews", get(list_reviews))
        .with_state(deps)
}

/// List every product in the catalog
#[utoipa::path(
    get,
    path = "/catalog",
    tag = "Catalog",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn list_catalog(
    State(deps): State<Arc<CatalogDependencies>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = deps.get_all_products.execute().await?;
    Ok(Json(products))
}

/// Get a single product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Invalid product id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 502, description = "Product service unreachable", body = ErrorResponse)
    )
)]
async fn get_product(
    State(deps): State<Arc<CatalogDependencies>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = deps.controller.get_product(&id).await?;

    // Absence is data inside the core; it becomes 404 only at this edge
    match product {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::NotFound(format!("Product {} not found", id.trim()))),
    }
}

/// List every category
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Catalog",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn list_categories(
    State(deps): State<Arc<CatalogDependencies>>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = deps.get_all_categories.execute().await?;
    Ok(Json(categories))
}

/// List every brand
#[utoipa::path(
    get,
    path = "/brands",
    tag = "Catalog",
    responses(
        (status = 200, description = "All brands", body = Vec<Brand>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn list_brands(
    State(deps): State<Arc<CatalogDependencies>>,
) -> Result<Json<Vec<Brand>>, AppError> {
    let brands = deps.get_all_brands.execute().await?;
    Ok(Json(brands))
}

/// Review listing query parameters
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct ReviewsQuery {
    /// Restrict to the reviews of one product
    pub product_id: Option<String>,
}

/// List reviews, optionally restricted to one product
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "Catalog",
    params(ReviewsQuery),
    responses(
        (status = 200, description = "Reviews", body = Vec<Review>),
        (status = 400, description = "Invalid product id", body = ErrorResponse)
    )
)]
async fn list_reviews(
    State(deps): State<Arc<CatalogDependencies>>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = match query.product_id {
        Some(product_id) => deps.get_product_reviews.execute(&product_id).await?,
        None => deps.review_repo.list_all().await?,
    };
    Ok(Json(reviews))
}
