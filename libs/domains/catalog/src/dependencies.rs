//! Dependency factory for the catalog domain.
//!
//! Pure construction: every call builds an independent object graph. There
//! is deliberately no process-wide default instance; the embedding binary
//! constructs the graph once at startup and owns it.

use std::sync::Arc;

use core_config::env_flag;

use crate::controller::CatalogController;
use crate::fixtures;
use crate::remote::{RemoteProductConfig, RemoteProductRepository};
use crate::repository::{
    BrandRepository, CategoryRepository, InMemoryBrandRepository, InMemoryCategoryRepository,
    InMemoryProductRepository, InMemoryReviewRepository, ProductRepository, ReviewRepository,
};
use crate::usecases::{
    GetAllBrands, GetAllCategories, GetAllProducts, GetProduct, GetProductReviews,
};

/// Options recognized by the factory.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// Direct product reads/writes at the in-memory repository instead of
    /// the remote product service.
    pub use_memory: bool,
    /// Pre-seed the in-memory repositories from the fixture set.
    pub with_test_data: bool,
    /// Remote product service address, used when `use_memory` is false.
    pub remote: RemoteProductConfig,
}

impl CatalogOptions {
    /// Read options from environment variables.
    ///
    /// - `CATALOG_USE_MEMORY` (default: true)
    /// - `CATALOG_WITH_TEST_DATA` (default: true)
    /// - `PRODUCT_API_URL` (default: the fixed demo address)
    pub fn from_env() -> Self {
        Self {
            use_memory: env_flag("CATALOG_USE_MEMORY", true),
            with_test_data: env_flag("CATALOG_WITH_TEST_DATA", true),
            remote: RemoteProductConfig::from_env(),
        }
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            use_memory: false,
            with_test_data: false,
            remote: RemoteProductConfig::default(),
        }
    }
}

/// The fully wired catalog object graph.
pub struct CatalogDependencies {
    /// Product repository selected by `use_memory` (shared by the product
    /// use-cases and the controller)
    pub product_repo: Arc<dyn ProductRepository>,
    /// The in-memory product repository, always constructed
    pub memory_product_repo: Arc<InMemoryProductRepository>,
    /// The remote product repository, always constructed
    pub remote_product_repo: Arc<RemoteProductRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub brand_repo: Arc<dyn BrandRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,

    pub get_product: Arc<GetProduct>,
    pub get_all_products: Arc<GetAllProducts>,
    pub get_all_categories: Arc<GetAllCategories>,
    pub get_all_brands: Arc<GetAllBrands>,
    pub get_product_reviews: Arc<GetProductReviews>,

    pub controller: CatalogController,
}

/// Create a fresh, independent set of catalog dependencies.
pub fn create_catalog_dependencies(options: CatalogOptions) -> CatalogDependencies {
    let memory_product_repo = if options.with_test_data {
        Arc::new(InMemoryProductRepository::with_products(
            fixtures::test_products(),
        ))
    } else {
        Arc::new(InMemoryProductRepository::new())
    };
    let remote_product_repo = Arc::new(RemoteProductRepository::new(options.remote.clone()));

    let product_repo: Arc<dyn ProductRepository> = if options.use_memory {
        memory_product_repo.clone()
    } else {
        remote_product_repo.clone()
    };

    let category_repo: Arc<dyn CategoryRepository> = if options.with_test_data {
        Arc::new(InMemoryCategoryRepository::with_categories(
            fixtures::test_categories(),
        ))
    } else {
        Arc::new(InMemoryCategoryRepository::new())
    };
    let brand_repo: Arc<dyn BrandRepository> = if options.with_test_data {
        Arc::new(InMemoryBrandRepository::with_brands(fixtures::test_brands()))
    } else {
        Arc::new(InMemoryBrandRepository::new())
    };
    let review_repo: Arc<dyn ReviewRepository> = if options.with_test_data {
        Arc::new(InMemoryReviewRepository::with_reviews(
            fixtures::test_reviews(),
        ))
    } else {
        Arc::new(InMemoryReviewRepository::new())
    };

    let get_product = Arc::new(GetProduct::new(product_repo.clone()));
    let get_all_products = Arc::new(GetAllProducts::new(product_repo.clone()));
    let get_all_categories = Arc::new(GetAllCategories::new(category_repo.clone()));
    let get_all_brands = Arc::new(GetAllBrands::new(brand_repo.clone()));
    let get_product_reviews = Arc::new(GetProductReviews::new(review_repo.clone()));

    let controller =
        CatalogController::new(Some(get_product.clone()), Some(get_all_products.clone()));

    CatalogDependencies {
        product_repo,
        memory_product_repo,
        remote_product_repo,
        category_repo,
        brand_repo,
        review_repo,
        get_product,
        get_all_products,
        get_all_categories,
        get_all_brands,
        get_product_reviews,
        controller,
    }
}
