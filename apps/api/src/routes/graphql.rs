//! GraphQL HTTP route handlers
//!
//! - `POST` executes a request against the schema held in router state
//! - `GET /graphql` serves the interactive playground

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::graphql::CatalogSchema;

/// Path the playground sends its requests to
///
/// The playground relies on introspection, so it targets the introspectable
/// schema rather than `/graphql-api`.
pub const PLAYGROUND_ENDPOINT: &str = "/graphql";

/// GraphQL handler that executes queries against the schema
pub async fn graphql_handler(
    State(schema): State<CatalogSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphQL Playground handler
pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(
        GraphQLPlaygroundConfig::new(PLAYGROUND_ENDPOINT)
            .with_setting("editor.theme", "dark")
            .with_setting("editor.cursorShape", "line")
            .with_setting("request.credentials", "include"),
    ))
}
