//! Product queries for the catalog GraphQL API

use async_graphql::{Context, Object, Result, ResultExt};

use crate::graphql::types::{filter_or_all, Product, ProductFilterInput};
use crate::repositories::SharedStore;

/// Product queries
#[derive(Default)]
pub struct ProductQuery;

#[Object]
impl ProductQuery {
    /// List products matching the filter
    ///
    /// `name` matches as a case-insensitive substring, every other field
    /// exactly. Without a filter every product is returned.
    async fn products(
        &self,
        ctx: &Context<'_>,
        filter: Option<ProductFilterInput>,
    ) -> Result<Vec<Product>> {
        let filter = filter_or_all(filter).extend()?;
        let store = ctx.data::<SharedStore>()?;
        let products = store.find_products(&filter).await.extend()?;
        Ok(products.into_iter().map(Product::from).collect())
    }
}
