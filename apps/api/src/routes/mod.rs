//! HTTP route handlers for the catalog API
//!
//! This module contains all endpoint handlers including:
//! - GraphQL execution and the playground
//! - Health check and status endpoints

pub mod graphql;
pub mod health;

pub use graphql::{graphql_handler, graphql_playground};
pub use health::{health_router, HealthState};

use axum::{
    routing::{get, post},
    Router,
};

use crate::error::ApiResult;
use crate::graphql::{build_api_schema, build_schema};
use crate::repositories::SharedStore;

/// Build the full application router over a store
///
/// - `GET /` - welcome text
/// - `GET /graphql` - playground, `POST /graphql` - introspectable schema
/// - `POST /graphql-api` - schema with introspection disabled
/// - `/health`, `/health/live`, `/health/ready`
///
/// Both schemas share the same store, so writes through one are visible
/// through the other.
pub fn catalog_router(store: SharedStore) -> ApiResult<Router> {
    let schema = build_schema(store.clone())?;
    let api_schema = build_api_schema(store.clone())?;

    tracing::info!(store = store.backend(), "GraphQL schemas built");

    let playground_routes = Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .with_state(schema);

    let api_routes = Router::new()
        .route("/graphql-api", post(graphql_handler))
        .with_state(api_schema);

    Ok(Router::new()
        .route("/", get(root))
        .merge(playground_routes)
        .merge(api_routes)
        // Nested health routes: /health, /health/live, /health/ready
        .nest("/health", health_router(HealthState::new(store))))
}

async fn root() -> &'static str {
    "Welcome to the catalog GraphQL API"
}
