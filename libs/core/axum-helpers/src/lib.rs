//! # Axum Helpers
//!
//! Shared utilities for building the project's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured JSON error responses with status mapping
//! - **[`health`]**: Liveness endpoint router
//! - **[`server`]**: Server bootstrap and graceful shutdown

pub mod errors;
pub mod health;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse, not_found};

// Re-export health types
pub use health::{HealthResponse, health_router};

// Re-export server helpers
pub use server::{create_app, shutdown_signal};
