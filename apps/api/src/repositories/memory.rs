//! In-memory catalog store
//!
//! Keeps both collections in process behind a single async `RwLock`. Every
//! store call takes the lock once, so a bulk update or delete is never
//! interleaved with another request's write. Data is lost on restart.

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::CatalogStore;
use crate::error::ApiResult;
use crate::models::{
    Category, NewCategory, NewProduct, Product, ProductFilter, ProductUpdate, WriteOutcome,
};

#[derive(Debug, Default)]
struct Collections {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// Catalog store held entirely in memory
///
/// Clones share the same underlying collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given documents
    pub fn with_data(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections {
                categories,
                products,
            })),
        }
    }

    /// Create a store with the sample categories and products
    pub fn seeded() -> Self {
        let now = bson::DateTime::now();

        let categories = [
            "This is Bad Category",
            "This is Mediocre Category",
            "This is Good Category",
        ]
        .into_iter()
        .map(|name| NewCategory::named(name).into_category(ObjectId::new()))
        .collect();

        let products = [
            ("This is Product One", 10.99),
            ("This is Product Two", 0.99),
            ("This is Product Three", 19.99),
        ]
        .into_iter()
        .map(|(name, price)| {
            NewProduct {
                name: Some(name.to_string()),
                description: Some("Descriptions are for losers.".to_string()),
                price: Some(price),
                ..Default::default()
            }
            .into_product(ObjectId::new(), now)
        })
        .collect();

        Self::with_data(categories, products)
    }

    /// Add a category, returning it with its generated identifier
    pub async fn insert_category(&self, category: NewCategory) -> Category {
        let category = category.into_category(ObjectId::new());
        self.inner.write().await.categories.push(category.clone());
        category
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> ApiResult<()> {
        Ok(())
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        Ok(self.inner.read().await.categories.clone())
    }

    async fn find_category(&self, id: ObjectId) -> ApiResult<Option<Category>> {
        let collections = self.inner.read().await;
        Ok(collections.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_products(&self, filter: &ProductFilter) -> ApiResult<Vec<Product>> {
        let collections = self.inner.read().await;
        Ok(collections
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn insert_product(&self, product: NewProduct) -> ApiResult<Product> {
        let product = product.into_product(ObjectId::new(), bson::DateTime::now());
        self.inner.write().await.products.push(product.clone());

        tracing::debug!(product_id = %product.id, "Product inserted into memory store");
        Ok(product)
    }

    async fn update_products(
        &self,
        filter: &ProductFilter,
        update: &ProductUpdate,
    ) -> ApiResult<WriteOutcome> {
        let mut collections = self.inner.write().await;
        let mut matched = 0;
        let mut modified = 0;

        for product in collections.products.iter_mut().filter(|p| filter.matches(p)) {
            matched += 1;
            if update.apply(product) {
                modified += 1;
            }
        }

        Ok(WriteOutcome::updated(matched, modified))
    }

    async fn delete_products(&self, filter: &ProductFilter) -> ApiResult<WriteOutcome> {
        let mut collections = self.inner.write().await;
        let before = collections.products.len();
        collections.products.retain(|p| !filter.matches(p));
        let removed = before - collections.products.len();

        Ok(WriteOutcome::deleted(removed as u64))
    }
}
