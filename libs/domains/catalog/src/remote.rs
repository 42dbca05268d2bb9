//! Remote implementation of [`ProductRepository`] backed by an external
//! product service speaking plain JSON over HTTP.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::CatalogResult;
use crate::models::Product;
use crate::repository::ProductRepository;

const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Remote product service configuration.
#[derive(Debug, Clone)]
pub struct RemoteProductConfig {
    /// Base URL of the product service (no trailing slash).
    pub base_url: String,
}

impl RemoteProductConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `PRODUCT_API_URL`, defaulting to the fixed demo address.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PRODUCT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for RemoteProductConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Product repository that delegates to the external product service.
///
/// Status-level failures are treated as absence (`find_by_id` -> `Ok(None)`,
/// `list_all` -> `Ok(vec![])`), matching the service's established contract.
/// Transport-level failures (connection refused, body decode) surface as
/// `CatalogError::Remote`. No retries and no timeouts are applied here.
#[derive(Debug, Clone)]
pub struct RemoteProductRepository {
    client: reqwest::Client,
    config: RemoteProductConfig,
}

impl RemoteProductRepository {
    pub fn new(config: RemoteProductConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(RemoteProductConfig::from_env())
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.config.base_url)
    }

    fn product_url(&self, id: &str) -> String {
        format!("{}/products/{}", self.config.base_url, id)
    }
}

#[async_trait]
impl ProductRepository for RemoteProductRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> CatalogResult<Option<Product>> {
        let response = self.client.get(self.product_url(id)).send().await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Non-success response treated as missing product");
            return Ok(None);
        }

        let json: Value = response.json().await?;
        Ok(Some(map_external_product(&json)))
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn save(&self, product: Product) -> CatalogResult<()> {
        // Fire-and-forget with respect to the response status
        let response = self
            .client
            .put(self.product_url(&product.id))
            .json(&product)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Product service rejected save");
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> CatalogResult<Vec<Product>> {
        let response = self.client.get(self.products_url()).send().await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Non-success response treated as empty catalog");
            return Ok(vec![]);
        }

        let json: Value = response.json().await?;
        match json.as_array() {
            Some(items) => Ok(items.iter().map(map_external_product).collect()),
            None => Ok(vec![]),
        }
    }
}

/// Translate an arbitrary external JSON shape into a [`Product`].
///
/// Total on any input: `id` and `name` coerce to strings (defaulting to
/// empty), `price_cents` prefers the `priceCents` key over `price_cents`
/// and defaults to zero. The result is always syntactically valid; callers
/// accept that it may be semantically incomplete.
pub fn map_external_product(value: &Value) -> Product {
    let price_cents = value
        .get("priceCents")
        .and_then(coerce_i64)
        .or_else(|| value.get("price_cents").and_then(coerce_i64))
        .unwrap_or(0);

    Product {
        id: coerce_string(value.get("id")),
        name: coerce_string(value.get("name")),
        price_cents,
        description: None,
        category_id: None,
        brand_id: None,
        images: vec![],
        stock: None,
        rating: None,
        review_count: None,
        tags: vec![],
        specifications: Default::default(),
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_complete_external_shape() {
        let json = json!({"id": "42", "name": "Widget", "priceCents": 1999});
        let product = map_external_product(&json);

        assert_eq!(product.id, "42");
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price_cents, 1999);
    }

    #[test]
    fn test_missing_fields_default() {
        let product = map_external_product(&json!({}));

        assert_eq!(product.id, "");
        assert_eq!(product.name, "");
        assert_eq!(product.price_cents, 0);
        assert!(product.images.is_empty());
        assert!(product.specifications.is_empty());
    }

    #[test]
    fn test_camel_case_price_wins_over_snake_case() {
        let json = json!({"priceCents": 100, "price_cents": 200});
        assert_eq!(map_external_product(&json).price_cents, 100);
    }

    #[test]
    fn test_snake_case_price_is_fallback() {
        let json = json!({"price_cents": 200});
        assert_eq!(map_external_product(&json).price_cents, 200);
    }

    #[test]
    fn test_unusable_camel_price_falls_through_to_snake() {
        let json = json!({"priceCents": null, "price_cents": 300});
        assert_eq!(map_external_product(&json).price_cents, 300);
    }

    #[test]
    fn test_numeric_id_is_rendered_as_string() {
        let json = json!({"id": 42, "name": "Widget"});
        assert_eq!(map_external_product(&json).id, "42");
    }

    #[test]
    fn test_numeric_string_price_is_parsed() {
        let json = json!({"priceCents": "1500"});
        assert_eq!(map_external_product(&json).price_cents, 1500);
    }

    #[test]
    fn test_never_fails_on_non_object_input() {
        for input in [json!(null), json!("garbage"), json!([1, 2, 3]), json!(7)] {
            let product = map_external_product(&input);
            assert_eq!(product.id, "");
            assert_eq!(product.price_cents, 0);
        }
    }

    #[test]
    fn test_config_default_base_url() {
        let config = RemoteProductConfig::default();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_config_strips_trailing_slash() {
        let config = RemoteProductConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_repository_urls() {
        let repo = RemoteProductRepository::new(RemoteProductConfig::default());
        assert_eq!(repo.products_url(), "https://api.example.com/products");
        assert_eq!(repo.product_url("7"), "https://api.example.com/products/7");
    }
}
