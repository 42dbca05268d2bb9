//! Route aggregation for the Catalog API

use axum::Router;
use domain_catalog::{handlers, CatalogDependencies};
use std::sync::Arc;

/// Nest every domain router under `/api`.
pub fn routes(deps: Arc<CatalogDependencies>) -> Router {
    Router::new().nest("/api", handlers::router(deps))
}
