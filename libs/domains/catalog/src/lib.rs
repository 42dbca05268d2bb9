//! Catalog Domain
//!
//! A layered, read-mostly storefront catalog: entities, repository traits,
//! in-memory and remote-HTTP repository implementations, single-query
//! use-cases, a thin controller, and a dependency factory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use-cases  │  ← Input validation, one query each
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (traits + in-memory/remote implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{create_catalog_dependencies, handlers, CatalogOptions};
//! use std::sync::Arc;
//!
//! let deps = Arc::new(create_catalog_dependencies(CatalogOptions {
//!     use_memory: true,
//!     with_test_data: true,
//!     ..Default::default()
//! }));
//!
//! let router = handlers::router(deps);
//! ```

pub mod controller;
pub mod dependencies;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod remote;
pub mod repository;
pub mod usecases;

// Re-export commonly used types
pub use controller::CatalogController;
pub use dependencies::{create_catalog_dependencies, CatalogDependencies, CatalogOptions};
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{Brand, Category, Product, Review};
pub use remote::{map_external_product, RemoteProductConfig, RemoteProductRepository};
pub use repository::{
    BrandRepository, CategoryRepository, InMemoryBrandRepository, InMemoryCategoryRepository,
    InMemoryProductRepository, InMemoryReviewRepository, ProductRepository, ReviewRepository,
};
pub use usecases::{
    GetAllBrands, GetAllCategories, GetAllProducts, GetProduct, GetProductReviews,
};
