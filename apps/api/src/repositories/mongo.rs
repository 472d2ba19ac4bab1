//! MongoDB catalog store
//!
//! Reads and writes the `categories` and `products` collections through the
//! official driver. The driver keeps its own connection pool, so one
//! `MongoStore` is created at startup and cloned into every request.

use std::time::Duration;

use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use futures_util::TryStreamExt;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use catalog_shared_config::MongoConfig;

use super::utils::{CATEGORIES_COLLECTION, PRODUCTS_COLLECTION};
use super::CatalogStore;
use crate::error::ApiResult;
use crate::models::{
    Category, NewCategory, NewProduct, Product, ProductFilter, ProductUpdate, WriteOutcome,
};

/// Catalog store backed by a MongoDB database
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
    categories: Collection<Category>,
    products: Collection<Product>,
}

impl MongoStore {
    /// Wrap an already configured database handle
    pub fn new(db: Database) -> Self {
        Self {
            categories: db.collection(CATEGORIES_COLLECTION),
            products: db.collection(PRODUCTS_COLLECTION),
            db,
        }
    }

    /// Connect to the configured server and verify it answers
    ///
    /// The driver connects lazily, so this pings once to surface an
    /// unreachable server at startup instead of on the first request.
    pub async fn connect(config: &MongoConfig) -> ApiResult<Self> {
        let timeout = Duration::from_secs(config.connect_timeout_secs);

        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some("catalog-api".to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.max_pool_size = Some(config.max_pool_size);

        let client = Client::with_options(options)?;
        let store = Self::new(client.database(&config.database));
        store.ping().await?;

        tracing::info!(database = %config.database, "MongoDB connection established");
        Ok(store)
    }

    /// The underlying database handle
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Add a category, returning it with its generated identifier
    pub async fn insert_category(&self, category: NewCategory) -> ApiResult<Category> {
        let category = category.into_category(ObjectId::new());
        self.categories.insert_one(&category, None).await?;
        Ok(category)
    }

    /// Drop the whole database (test cleanup)
    pub async fn drop_database(&self) -> ApiResult<()> {
        self.db.drop(None).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MongoStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn ping(&self) -> ApiResult<()> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let cursor = self.categories.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_category(&self, id: ObjectId) -> ApiResult<Option<Category>> {
        Ok(self.categories.find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_products(&self, filter: &ProductFilter) -> ApiResult<Vec<Product>> {
        let cursor = self.products.find(filter.to_document(), None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_product(&self, product: NewProduct) -> ApiResult<Product> {
        let product = product.into_product(ObjectId::new(), bson::DateTime::now());
        self.products.insert_one(&product, None).await?;

        tracing::debug!(product_id = %product.id, "Product inserted");
        Ok(product)
    }

    async fn update_products(
        &self,
        filter: &ProductFilter,
        update: &ProductUpdate,
    ) -> ApiResult<WriteOutcome> {
        let query = filter.to_document();

        // The server rejects an empty $set, so a field-less update only counts.
        if update.is_empty() {
            let matched = self.products.count_documents(query, None).await?;
            return Ok(WriteOutcome::updated(matched, 0));
        }

        let result = self
            .products
            .update_many(query, doc! { "$set": update.to_set_document() }, None)
            .await?;

        Ok(WriteOutcome::updated(
            result.matched_count,
            result.modified_count,
        ))
    }

    async fn delete_products(&self, filter: &ProductFilter) -> ApiResult<WriteOutcome> {
        let result = self.products.delete_many(filter.to_document(), None).await?;
        Ok(WriteOutcome::deleted(result.deleted_count))
    }
}
