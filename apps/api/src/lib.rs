//! Catalog API library
//!
//! This module exposes the core API components for use by the server binary
//! and by integration tests.

pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod repositories;
pub mod routes;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use graphql::{build_api_schema, build_schema, CatalogSchema, SchemaBuilder};
pub use repositories::{CatalogStore, MemoryStore, MongoStore, SharedStore};
pub use routes::catalog_router;
