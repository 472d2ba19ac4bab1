//! GraphQL mutations for the catalog
//!
//! This module contains all mutation resolvers, organized by domain.

mod product;

pub use product::ProductMutation;

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
#[graphql(name = "root_mutation")]
pub struct Mutation(ProductMutation);
