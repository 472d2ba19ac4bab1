//! GraphQL schema and resolvers for the catalog
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for categories, products and API info
//! - Mutation resolvers for creating, updating and deleting products
//! - Type definitions for all GraphQL objects and inputs

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_api_schema, build_schema, CatalogSchema, SchemaBuilder};
