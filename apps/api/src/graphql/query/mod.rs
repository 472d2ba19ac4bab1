//! GraphQL queries for the catalog
//!
//! This module contains all query resolvers, organized by domain.

mod category;
mod info;
mod product;

pub use category::CategoryQuery;
pub use info::{InfoQuery, INFO_MESSAGE};
pub use product::ProductQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
#[graphql(name = "root_query")]
pub struct Query(CategoryQuery, ProductQuery, InfoQuery);
