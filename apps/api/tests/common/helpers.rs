//! Test helper functions for API integration tests
//!
//! Provides utility functions for executing GraphQL requests and reading
//! responses.

#![allow(dead_code)]

use async_graphql::{Request, Response, Variables};
use axum::{
    body::Body,
    http::{header, Method, Request as HttpRequest},
    Router,
};
use catalog_api::CatalogSchema;
use serde_json::Value;
use tower::ServiceExt;

/// Execute a query and return the JSON data, panicking on GraphQL errors
pub async fn execute_ok(schema: &CatalogSchema, query: &str, variables: Value) -> Value {
    let response = execute(schema, query, variables).await;
    assert!(
        response.errors.is_empty(),
        "unexpected GraphQL errors: {:?}",
        response.errors
    );
    response
        .data
        .into_json()
        .expect("GraphQL data converts to JSON")
}

/// Execute a query with variables
pub async fn execute(schema: &CatalogSchema, query: &str, variables: Value) -> Response {
    schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

/// The `code` extension of the first GraphQL error
pub fn first_error_code(response: &Response) -> Option<String> {
    let extensions = response.errors.first()?.extensions.as_ref()?;
    match extensions.get("code")? {
        async_graphql::Value::String(code) => Some(code.clone()),
        _ => None,
    }
}

/// POST a GraphQL query to `uri` and return the status and JSON body
pub async fn post_graphql(app: Router, uri: &str, query: &str) -> (u16, Value) {
    let body = serde_json::json!({ "query": query }).to_string();
    let response = app
        .oneshot(
            HttpRequest::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Sorted product names from a `products` result
pub fn names(products: &Value) -> Vec<String> {
    let mut names: Vec<String> = products
        .as_array()
        .expect("products is a list")
        .iter()
        .filter_map(|p| p["name"].as_str().map(str::to_string))
        .collect();
    names.sort();
    names
}
