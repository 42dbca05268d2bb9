//! Catalog API - read-only storefront catalog server

use axum_helpers::{create_app, health_router, not_found};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::{create_catalog_dependencies, ApiDoc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        use_memory = config.catalog.use_memory,
        with_test_data = config.catalog.with_test_data,
        "Building catalog dependency graph"
    );

    let deps = Arc::new(create_catalog_dependencies(config.catalog.clone()));

    let app = api::routes(deps)
        .merge(health_router(config.app))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    info!("Starting Catalog API on port {}", config.server.port);

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
