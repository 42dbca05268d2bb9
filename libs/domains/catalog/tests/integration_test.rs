//! Integration tests for the catalog domain
//!
//! These tests drive the dependency factory end to end:
//! - Seeded graphs serve the fixture data in fixture order
//! - Use-case validation fires before any repository access
//! - Upsert semantics hold across the public surface

use domain_catalog::*;
use std::sync::Arc;

fn seeded() -> CatalogDependencies {
    create_catalog_dependencies(CatalogOptions {
        use_memory: true,
        with_test_data: true,
        ..Default::default()
    })
}

fn empty_in_memory() -> CatalogDependencies {
    create_catalog_dependencies(CatalogOptions {
        use_memory: true,
        with_test_data: false,
        ..Default::default()
    })
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[tokio::test]
async fn test_seeded_factory_lists_fixture_products_in_order() {
    let deps = seeded();

    let products = deps.get_all_products.execute().await.unwrap();

    assert_eq!(products.len(), 52);
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    let expected: Vec<String> = (1..=52).map(|n| n.to_string()).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(products, fixtures::test_products());
}

#[tokio::test]
async fn test_product_reviews_for_product_1_are_the_two_fixture_reviews() {
    let deps = seeded();

    let reviews = deps.get_product_reviews.execute("1").await.unwrap();

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, "rev-1");
    assert_eq!(reviews[0].user_name, "John Smith");
    assert_eq!(reviews[1].id, "rev-2");
    assert_eq!(reviews[1].user_name, "Sarah Johnson");
}

#[tokio::test]
async fn test_empty_id_rejects_with_required_message() {
    let deps = seeded();

    let err = deps.get_product.execute("").await.unwrap_err();

    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Product ID is required");
}

#[tokio::test]
async fn test_trimmed_lookup_on_empty_repository_resolves_to_none() {
    let deps = empty_in_memory();

    let result = deps.get_product.execute("  42  ").await.unwrap();

    assert!(result.is_none());
}

// ============================================================================
// Controller
// ============================================================================

#[tokio::test]
async fn test_controller_serves_product_and_listing() {
    let deps = seeded();

    let product = deps.controller.get_product("3").await.unwrap().unwrap();
    assert_eq!(product.name, "GigaTech Z9 Pro");

    let products = deps.controller.get_all_products().await.unwrap();
    assert_eq!(products.len(), 52);
}

// ============================================================================
// Store properties through the public surface
// ============================================================================

#[tokio::test]
async fn test_saved_product_is_visible_to_use_cases() {
    let deps = empty_in_memory();

    let mut product = fixtures::test_products().remove(0);
    product.id = "custom-1".to_string();
    deps.product_repo.save(product.clone()).await.unwrap();

    let found = deps.get_product.execute("custom-1").await.unwrap();
    assert_eq!(found, Some(product));
}

#[tokio::test]
async fn test_upsert_replaces_without_growing_the_catalog() {
    let deps = seeded();

    let mut replacement = deps
        .get_product
        .execute("1")
        .await
        .unwrap()
        .expect("fixture product exists");
    replacement.name = "Renamed".to_string();
    replacement.description = None;

    deps.product_repo.save(replacement.clone()).await.unwrap();

    let products = deps.get_all_products.execute().await.unwrap();
    assert_eq!(products.len(), 52);
    // Replaced in place, keeping fixture position
    assert_eq!(products[0].name, "Renamed");
    assert!(products[0].description.is_none());
}

#[tokio::test]
async fn test_concurrent_readers_share_one_store() {
    let deps = Arc::new(seeded());

    let mut handles = vec![];
    for _ in 0..8 {
        let deps = Arc::clone(&deps);
        handles.push(tokio::spawn(async move {
            deps.get_all_products.execute().await.unwrap().len()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 52);
    }
}
