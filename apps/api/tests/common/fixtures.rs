//! Test fixtures for API integration tests
//!
//! Provides stores seeded with known documents and schemas built over them.

#![allow(dead_code)]

use std::sync::Arc;

use bson::oid::ObjectId;
use catalog_api::models::{Category, NewCategory, NewProduct, Product};
use catalog_api::{build_api_schema, build_schema, CatalogSchema, MemoryStore, SharedStore};

/// Documents held by a seeded test store
#[derive(Debug, Clone)]
pub struct Seed {
    pub category: Category,
    pub widget_a: Product,
    pub widget_b: Product,
}

/// Build a product with a fresh identifier
pub fn product(name: &str, quantity: i32, category: Option<ObjectId>) -> Product {
    NewProduct {
        name: Some(name.to_string()),
        quantity: Some(quantity),
        category_id: category,
        price: Some(2.5),
        ..Default::default()
    }
    .into_product(ObjectId::new(), bson::DateTime::now())
}

/// One category and two widgets: "Widget A" (quantity 3) and "Widget B" (quantity 5)
pub fn seed() -> Seed {
    let category = NewCategory::named("Widgets").into_category(ObjectId::new());
    let widget_a = product("Widget A", 3, Some(category.id));
    let widget_b = product("Widget B", 5, None);

    Seed {
        category,
        widget_a,
        widget_b,
    }
}

/// A memory store holding [`seed`]
pub fn seeded_store() -> (MemoryStore, Seed) {
    let seed = seed();
    let store = MemoryStore::with_data(
        vec![seed.category.clone()],
        vec![seed.widget_a.clone(), seed.widget_b.clone()],
    );
    (store, seed)
}

/// The introspectable schema over a seeded memory store
pub fn seeded_schema() -> (CatalogSchema, Seed) {
    let (store, seed) = seeded_store();
    let schema = build_schema(Arc::new(store)).expect("schema builds with a store");
    (schema, seed)
}

/// Both schemas over the same seeded memory store
pub fn seeded_schemas() -> (CatalogSchema, CatalogSchema, Seed) {
    let (store, seed) = seeded_store();
    let store: SharedStore = Arc::new(store);
    let schema = build_schema(store.clone()).expect("schema builds with a store");
    let api_schema = build_api_schema(store).expect("schema builds with a store");
    (schema, api_schema, seed)
}
