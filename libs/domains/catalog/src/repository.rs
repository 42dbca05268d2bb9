use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::models::{Brand, Category, Product, Review};

/// Repository trait for Product access
///
/// This trait defines the data access interface for products.
/// Implementations can use different backends (in-memory, remote HTTP, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by id; absence is `Ok(None)`, never an error
    async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Product>>;

    /// Upsert a product by id (full replace, no field merge)
    async fn save(&self, product: Product) -> CatalogResult<()>;

    /// List all products in the backing store's insertion order
    async fn list_all(&self) -> CatalogResult<Vec<Product>>;
}

/// Repository trait for Category access
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Category>>;
    async fn save(&self, category: Category) -> CatalogResult<()>;
    async fn list_all(&self) -> CatalogResult<Vec<Category>>;
}

/// Repository trait for Brand access
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Brand>>;
    async fn save(&self, brand: Brand) -> CatalogResult<()>;
    async fn list_all(&self) -> CatalogResult<Vec<Brand>>;
}

/// Repository trait for Review access
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Review>>;

    /// All reviews whose `product_id` equals the given id exactly, in the
    /// backing store's iteration order
    async fn find_by_product_id(&self, product_id: &str) -> CatalogResult<Vec<Review>>;

    async fn save(&self, review: Review) -> CatalogResult<()>;
    async fn list_all(&self) -> CatalogResult<Vec<Review>>;
}

/// In-memory implementation of ProductRepository.
///
/// Backed by an `IndexMap` so `list_all` reflects insertion order: saving an
/// existing id replaces the value in place, a new id appends. No locking
/// beyond the single `RwLock`; interleaved saves on one key are
/// last-write-wins.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    items: Arc<RwLock<IndexMap<String, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given products, preserving
    /// their order.
    pub fn with_products(initial: Vec<Product>) -> Self {
        let items = initial
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Product>> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn save(&self, product: Product) -> CatalogResult<()> {
        let mut items = self.items.write().await;
        tracing::debug!(product_id = %product.id, "Saving product");
        items.insert(product.id.clone(), product);
        Ok(())
    }

    async fn list_all(&self) -> CatalogResult<Vec<Product>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}

/// In-memory implementation of CategoryRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    items: Arc<RwLock<IndexMap<String, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(initial: Vec<Category>) -> Self {
        let items = initial
            .into_iter()
            .map(|category| (category.id.clone(), category))
            .collect();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Category>> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn save(&self, category: Category) -> CatalogResult<()> {
        let mut items = self.items.write().await;
        items.insert(category.id.clone(), category);
        Ok(())
    }

    async fn list_all(&self) -> CatalogResult<Vec<Category>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}

/// In-memory implementation of BrandRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryBrandRepository {
    items: Arc<RwLock<IndexMap<String, Brand>>>,
}

impl InMemoryBrandRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brands(initial: Vec<Brand>) -> Self {
        let items = initial
            .into_iter()
            .map(|brand| (brand.id.clone(), brand))
            .collect();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Brand>> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn save(&self, brand: Brand) -> CatalogResult<()> {
        let mut items = self.items.write().await;
        items.insert(brand.id.clone(), brand);
        Ok(())
    }

    async fn list_all(&self) -> CatalogResult<Vec<Brand>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}

/// In-memory implementation of ReviewRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryReviewRepository {
    items: Arc<RwLock<IndexMap<String, Review>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviews(initial: Vec<Review>) -> Self {
        let items = initial
            .into_iter()
            .map(|review| (review.id.clone(), review))
            .collect();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Review>> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn find_by_product_id(&self, product_id: &str) -> CatalogResult<Vec<Review>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|review| review.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn save(&self, review: Review) -> CatalogResult<()> {
        let mut items = self.items.write().await;
        items.insert(review.id.clone(), review);
        Ok(())
    }

    async fn list_all(&self) -> CatalogResult<Vec<Review>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}
