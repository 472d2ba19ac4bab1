//! Product mutations for the catalog GraphQL API
//!
//! This module provides mutations for product management:
//! - create_product: Insert a product with a generated identifier
//! - update_products: Overwrite fields on every product matching a filter
//! - delete_product: Remove a product by identifier
//! - delete_product_byid: Remove every product matching a filter
//!
//! Field names keep the snake_case wire names existing clients call.
//! Bulk writes are not transactional: each one is a single store call and
//! inherits that store's atomicity.

use async_graphql::{Context, Object, Result, ResultExt, ID};
use chrono::{DateTime, Utc};

use crate::graphql::types::{filter_or_all, MongoResult, Product, ProductFilterInput, ProductInput};
use crate::models::{parse_object_id, ProductFilter};
use crate::repositories::SharedStore;

/// Product mutations
#[derive(Default)]
pub struct ProductMutation;

#[Object]
impl ProductMutation {
    /// Create a product
    ///
    /// Every field is optional. `created` defaults to the current time.
    ///
    /// # Returns
    /// The stored product, including its generated `_id`
    ///
    /// # Errors
    /// - Returns error if `categoryId` is not a valid identifier
    #[graphql(name = "create_product")]
    #[allow(clippy::too_many_arguments)]
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        category_id: Option<ID>,
        description: Option<String>,
        price: Option<f64>,
        quantity: Option<i32>,
        created: Option<DateTime<Utc>>,
        updated: Option<DateTime<Utc>>,
    ) -> Result<Product> {
        let product = ProductInput {
            name,
            category_id,
            description,
            price,
            quantity,
            created,
            updated,
        }
        .into_new_product()
        .extend()?;

        let store = ctx.data::<SharedStore>()?;
        let product = store.insert_product(product).await.extend()?;

        tracing::info!(product_id = %product.id, "Product created");

        Ok(Product::from(product))
    }

    /// Overwrite fields on every product matching the filter
    ///
    /// Only fields present in `update` change. A missing filter matches every
    /// product.
    ///
    /// # Returns
    /// Matched count in `n` and changed count in `nModified`
    #[graphql(name = "update_products")]
    async fn update_products(
        &self,
        ctx: &Context<'_>,
        filter: Option<ProductFilterInput>,
        update: ProductInput,
    ) -> Result<MongoResult> {
        let filter = filter_or_all(filter).extend()?;
        let update = update.into_update().extend()?;

        let store = ctx.data::<SharedStore>()?;
        let outcome = store.update_products(&filter, &update).await.extend()?;

        tracing::info!(
            matched = outcome.matched,
            modified = ?outcome.modified,
            "Products updated"
        );

        Ok(outcome.into())
    }

    /// Delete a product by identifier
    ///
    /// Deleting an identifier that does not exist is not an error; `n` is 0.
    #[graphql(name = "delete_product")]
    async fn delete_product(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "_id")] id: ID,
    ) -> Result<MongoResult> {
        let id = parse_object_id("_id", &id).extend()?;

        let store = ctx.data::<SharedStore>()?;
        let outcome = store
            .delete_products(&ProductFilter::by_id(id))
            .await
            .extend()?;

        tracing::info!(product_id = %id, removed = outcome.matched, "Product deleted");

        Ok(outcome.into())
    }

    /// Delete every product matching the filter
    ///
    /// The filter is required; pass an empty object to delete all products.
    #[graphql(name = "delete_product_byid")]
    async fn delete_product_byid(
        &self,
        ctx: &Context<'_>,
        filter: ProductFilterInput,
    ) -> Result<MongoResult> {
        let filter = filter.into_filter().extend()?;

        let store = ctx.data::<SharedStore>()?;
        let outcome = store.delete_products(&filter).await.extend()?;

        tracing::info!(removed = outcome.matched, "Products deleted by filter");

        Ok(outcome.into())
    }
}
