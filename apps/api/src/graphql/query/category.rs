//! Category queries for the catalog GraphQL API

use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::graphql::types::Category;
use crate::models::parse_object_id;
use crate::repositories::SharedStore;

/// Category queries
#[derive(Default)]
pub struct CategoryQuery;

#[Object]
impl CategoryQuery {
    /// List every category
    ///
    /// `id` is accepted for compatibility with existing clients and does not
    /// narrow the result; use `getCategoryById` for a single category.
    async fn get_all_categories(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
    ) -> Result<Vec<Category>> {
        if let Some(id) = id {
            tracing::debug!(id = %id.as_str(), "getAllCategories ignores the id argument");
        }

        let store = ctx.data::<SharedStore>()?;
        let categories = store.list_categories().await.extend()?;
        Ok(categories.into_iter().map(Category::from).collect())
    }

    /// Get a category by ID
    async fn get_category_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Category>> {
        let store = ctx.data::<SharedStore>()?;
        let id = parse_object_id("id", &id).extend()?;
        let category = store.find_category(id).await.extend()?;
        Ok(category.map(Category::from))
    }
}
