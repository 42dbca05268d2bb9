use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity - a single sellable item in the catalog.
///
/// Products reference their category and brand by id only; resolving those
/// references is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (never empty)
    pub id: String,
    /// Product name
    pub name: String,
    /// Price in cents (for precision)
    pub price_cents: i64,
    /// Product description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category this product belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Brand this product belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    /// Image URLs in display order
    #[serde(default)]
    pub images: Vec<String>,
    /// Current stock quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    /// Average rating (0-5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews behind the rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<i32>,
    /// Tags for search and organization
    #[serde(default)]
    pub tags: Vec<String>,
    /// Key/value specifications, unique keys, listed order preserved
    #[serde(default)]
    pub specifications: IndexMap<String, String>,
}

/// Category entity.
///
/// `parent_id` allows categories to form a tree. Chains are not validated:
/// cycles and dangling parents are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Brand entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Review entity - a user review of one product.
///
/// `product_id` is a plain string reference; it is not checked against the
/// product store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub user_name: String,
    /// 1-5 stars (not range-validated)
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helpful: Option<i32>,
}
