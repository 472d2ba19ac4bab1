//! GraphQL schema builder for the catalog API
//!
//! This module provides the schema construction for the async-graphql API.
//! Two variants are served: one with introspection for the playground and
//! one with introspection disabled for plain API clients.

use async_graphql::{EmptySubscription, Schema};

use crate::error::{ApiError, ApiResult};
use crate::repositories::SharedStore;

use super::mutation::Mutation;
use super::query::Query;

/// The catalog GraphQL schema type
pub type CatalogSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with its backing store
pub struct SchemaBuilder {
    store: Option<SharedStore>,
    introspection: bool,
}

impl SchemaBuilder {
    /// Create a new schema builder with introspection enabled
    pub fn new() -> Self {
        Self {
            store: None,
            introspection: true,
        }
    }

    /// Set the catalog store resolvers read and write through
    pub fn store(mut self, store: SharedStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Enable or disable schema introspection (`__schema`, `__type`)
    pub fn introspection(mut self, enabled: bool) -> Self {
        self.introspection = enabled;
        self
    }

    /// Build the schema
    ///
    /// # Errors
    /// Returns `ApiError::Configuration` if no store was configured
    pub fn build(self) -> ApiResult<CatalogSchema> {
        let store = self
            .store
            .ok_or_else(|| ApiError::Configuration("catalog store is required".to_string()))?;

        let mut builder = Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(store);

        if !self.introspection {
            builder = builder.disable_introspection();
        }

        Ok(builder.finish())
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the schema served to the playground, with introspection
pub fn build_schema(store: SharedStore) -> ApiResult<CatalogSchema> {
    SchemaBuilder::new().store(store).build()
}

/// Create the schema served to API clients, without introspection
pub fn build_api_schema(store: SharedStore) -> ApiResult<CatalogSchema> {
    SchemaBuilder::new().store(store).introspection(false).build()
}
