//! Application layer: one use-case per query.
//!
//! Each use-case wraps exactly one repository call, validating its input
//! before delegating. Repository failures pass through unchanged; absence
//! stays `Ok(None)` / empty rather than becoming an error.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Brand, Category, Product, Review};
use crate::repository::{
    BrandRepository, CategoryRepository, ProductRepository, ReviewRepository,
};

/// Validate a required id: non-empty, non-whitespace. Returns the trimmed id.
fn require_product_id(id: &str) -> CatalogResult<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::missing_product_id());
    }
    Ok(trimmed)
}

/// Fetch a single product by id.
pub struct GetProduct {
    repository: Arc<dyn ProductRepository>,
}

impl GetProduct {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Validates and trims the id, then looks the product up.
    /// Absence is `Ok(None)`, not an error.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> CatalogResult<Option<Product>> {
        let trimmed = require_product_id(id)?;
        self.repository.find_by_id(trimmed).await
    }
}

/// List every product in the catalog.
pub struct GetAllProducts {
    repository: Arc<dyn ProductRepository>,
}

impl GetAllProducts {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> CatalogResult<Vec<Product>> {
        self.repository.list_all().await
    }
}

/// List every category.
pub struct GetAllCategories {
    repository: Arc<dyn CategoryRepository>,
}

impl GetAllCategories {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> CatalogResult<Vec<Category>> {
        self.repository.list_all().await
    }
}

/// List every brand.
pub struct GetAllBrands {
    repository: Arc<dyn BrandRepository>,
}

impl GetAllBrands {
    pub fn new(repository: Arc<dyn BrandRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> CatalogResult<Vec<Brand>> {
        self.repository.list_all().await
    }
}

/// List the reviews of one product.
pub struct GetProductReviews {
    repository: Arc<dyn ReviewRepository>,
}

impl GetProductReviews {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }

    /// Same validation and trimming discipline as [`GetProduct`].
    #[instrument(skip(self))]
    pub async fn execute(&self, product_id: &str) -> CatalogResult<Vec<Review>> {
        let trimmed = require_product_id(product_id)?;
        self.repository.find_by_product_id(trimmed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockProductRepository, MockReviewRepository};
    use mockall::predicate;

    #[tokio::test]
    async fn test_get_product_trims_before_delegating() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(predicate::eq("42"))
            .times(1)
            .returning(|_| Ok(None));

        let use_case = GetProduct::new(Arc::new(mock_repo));
        let result = use_case.execute("  42  ").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_product_rejects_empty_id_without_touching_repo() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().never();

        let use_case = GetProduct::new(Arc::new(mock_repo));
        let err = use_case.execute("").await.unwrap_err();

        assert!(matches!(err, CatalogError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Product ID is required");
    }

    #[tokio::test]
    async fn test_get_product_rejects_whitespace_only_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().never();

        let use_case = GetProduct::new(Arc::new(mock_repo));
        let err = use_case.execute("   \t ").await.unwrap_err();

        assert_eq!(err.to_string(), "Product ID is required");
    }

    #[tokio::test]
    async fn test_get_product_passes_repository_failure_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(CatalogError::Remote("connection refused".to_string())));

        let use_case = GetProduct::new(Arc::new(mock_repo));
        let err = use_case.execute("42").await.unwrap_err();

        assert!(matches!(err, CatalogError::Remote(_)));
    }

    #[tokio::test]
    async fn test_get_all_products_delegates_to_list_all() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![]));

        let use_case = GetAllProducts::new(Arc::new(mock_repo));
        let products = use_case.execute().await.unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_get_product_reviews_trims_before_delegating() {
        let mut mock_repo = MockReviewRepository::new();
        mock_repo
            .expect_find_by_product_id()
            .with(predicate::eq("7"))
            .times(1)
            .returning(|_| Ok(vec![]));

        let use_case = GetProductReviews::new(Arc::new(mock_repo));
        let reviews = use_case.execute(" 7 ").await.unwrap();

        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn test_get_product_reviews_rejects_empty_id() {
        let mut mock_repo = MockReviewRepository::new();
        mock_repo.expect_find_by_product_id().never();

        let use_case = GetProductReviews::new(Arc::new(mock_repo));
        let err = use_case.execute(" ").await.unwrap_err();

        assert_eq!(err.to_string(), "Product ID is required");
    }
}
