//! Category GraphQL type

use async_graphql::{Object, ID};
use chrono::{DateTime, Utc};

use crate::models::Category as DbCategory;

/// Category information exposed via GraphQL
pub struct Category {
    inner: DbCategory,
}

impl Category {
    /// Create a new GraphQL Category from a stored Category
    pub fn new(category: DbCategory) -> Self {
        Self { inner: category }
    }
}

impl From<DbCategory> for Category {
    fn from(category: DbCategory) -> Self {
        Self::new(category)
    }
}

#[Object(name = "CategoryType")]
impl Category {
    /// Unique category identifier
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.inner.id.to_hex())
    }

    /// Category name
    async fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Category description
    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Creation timestamp
    async fn created(&self) -> Option<DateTime<Utc>> {
        self.inner.created.map(|created| created.to_chrono())
    }
}
