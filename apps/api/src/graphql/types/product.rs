//! Product GraphQL type
//!
//! This module defines the GraphQL type for products with the category
//! relationship resolver.

use async_graphql::{Context, Object, Result, ResultExt, ID};
use chrono::{DateTime, Utc};

use crate::models::Product as DbProduct;
use crate::repositories::SharedStore;

use super::category::Category;

/// Product information exposed via GraphQL
pub struct Product {
    inner: DbProduct,
}

impl Product {
    /// Create a new GraphQL Product from a stored Product
    pub fn new(product: DbProduct) -> Self {
        Self { inner: product }
    }
}

impl From<DbProduct> for Product {
    fn from(product: DbProduct) -> Self {
        Self::new(product)
    }
}

#[Object(name = "ProductType")]
impl Product {
    /// Unique product identifier
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.inner.id.to_hex())
    }

    /// Product name
    async fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Identifier of the category this product belongs to
    async fn category_id(&self) -> Option<ID> {
        self.inner.category_id.map(|id| ID(id.to_hex()))
    }

    /// Product description
    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Unit price
    async fn price(&self) -> Option<f64> {
        self.inner.price
    }

    /// Units in stock
    async fn quantity(&self) -> Option<i32> {
        self.inner.quantity
    }

    /// Creation timestamp
    async fn created(&self) -> Option<DateTime<Utc>> {
        self.inner.created.map(|created| created.to_chrono())
    }

    /// Last update timestamp
    async fn updated(&self) -> Option<DateTime<Utc>> {
        self.inner.updated.map(|updated| updated.to_chrono())
    }

    // Relationship resolvers

    /// Category this product belongs to
    ///
    /// Looked up once per product; listing many products with this field
    /// selected issues one category lookup each.
    async fn category(&self, ctx: &Context<'_>) -> Result<Option<Category>> {
        let Some(category_id) = self.inner.category_id else {
            return Ok(None);
        };

        let store = ctx.data::<SharedStore>()?;
        let category = store.find_category(category_id).await.extend()?;
        Ok(category.map(Category::from))
    }
}
