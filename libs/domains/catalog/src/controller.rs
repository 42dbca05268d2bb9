use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Product;
use crate::usecases::{GetAllProducts, GetProduct};

/// Thin aggregation point over the product use-cases.
///
/// Adds no logic beyond delegation. Each backing use-case is optional at
/// construction; invoking a method whose use-case was not supplied fails
/// with [`CatalogError::Configuration`].
pub struct CatalogController {
    get_product: Option<Arc<GetProduct>>,
    get_all_products: Option<Arc<GetAllProducts>>,
}

impl CatalogController {
    pub fn new(
        get_product: Option<Arc<GetProduct>>,
        get_all_products: Option<Arc<GetAllProducts>>,
    ) -> Self {
        Self {
            get_product,
            get_all_products,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> CatalogResult<Option<Product>> {
        let use_case = self.get_product.as_ref().ok_or_else(|| {
            CatalogError::Configuration("GetProduct use case not configured".to_string())
        })?;
        use_case.execute(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> CatalogResult<Vec<Product>> {
        let use_case = self.get_all_products.as_ref().ok_or_else(|| {
            CatalogError::Configuration("GetAllProducts use case not configured".to_string())
        })?;
        use_case.execute().await
    }
}
