//! Data access layer for the catalog
//!
//! Resolvers never talk to a database directly. They receive a
//! [`SharedStore`] from the GraphQL context and call [`CatalogStore`]
//! methods, which are implemented by:
//! - [`MongoStore`]: the `categories` and `products` MongoDB collections
//! - [`MemoryStore`]: an in-process store seeded with sample data

pub mod memory;
pub mod mongo;
pub mod utils;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::error::ApiResult;
use crate::models::{Category, NewProduct, Product, ProductFilter, ProductUpdate, WriteOutcome};

/// Store handle shared by every request
pub type SharedStore = Arc<dyn CatalogStore>;

/// Operations the resolvers need from a backing store
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;

    /// Check that the store can serve requests
    async fn ping(&self) -> ApiResult<()>;

    /// All categories in the store's natural order
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;

    /// A single category by identifier
    async fn find_category(&self, id: ObjectId) -> ApiResult<Option<Category>>;

    /// Products matching the filter, in the store's natural order
    async fn find_products(&self, filter: &ProductFilter) -> ApiResult<Vec<Product>>;

    /// Insert a product under a freshly generated identifier
    async fn insert_product(&self, product: NewProduct) -> ApiResult<Product>;

    /// Overwrite the provided fields on every matching product
    async fn update_products(
        &self,
        filter: &ProductFilter,
        update: &ProductUpdate,
    ) -> ApiResult<WriteOutcome>;

    /// Remove every matching product
    async fn delete_products(&self, filter: &ProductFilter) -> ApiResult<WriteOutcome>;
}
