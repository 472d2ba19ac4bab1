//! GraphQL input types for products
//!
//! Inputs arrive with string identifiers; converting them into the typed
//! [`ProductFilter`] / [`ProductUpdate`] / [`NewProduct`] is where malformed
//! identifiers are rejected.

use async_graphql::{InputObject, ID};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

use crate::error::ApiResult;
use crate::models::{parse_optional_object_id, NewProduct, ProductFilter, ProductUpdate};

fn convert_id(field: &'static str, id: Option<&ID>) -> ApiResult<Option<ObjectId>> {
    parse_optional_object_id(field, id.map(|id| id.as_str()))
}

/// Partial product used to select products; absent fields match anything
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "ProductFilterType")]
pub struct ProductFilterInput {
    /// Exact product identifier
    #[graphql(name = "_id")]
    pub id: Option<ID>,
    /// Case-insensitive substring of the product name
    pub name: Option<String>,
    /// Exact category identifier
    pub category_id: Option<ID>,
    /// Exact description
    pub description: Option<String>,
    /// Exact price
    pub price: Option<f64>,
    /// Exact quantity
    pub quantity: Option<i32>,
}

impl ProductFilterInput {
    /// Validate identifiers and build the store filter
    pub fn into_filter(self) -> ApiResult<ProductFilter> {
        Ok(ProductFilter {
            id: convert_id("_id", self.id.as_ref())?,
            name: self.name,
            category_id: convert_id("categoryId", self.category_id.as_ref())?,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        })
    }
}

/// Convert an optional filter argument; no filter matches every product
pub fn filter_or_all(filter: Option<ProductFilterInput>) -> ApiResult<ProductFilter> {
    filter.map_or_else(|| Ok(ProductFilter::all()), ProductFilterInput::into_filter)
}

/// Product fields; provided fields replace stored values
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "ProductInputType")]
pub struct ProductInput {
    pub name: Option<String>,
    pub category_id: Option<ID>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

impl ProductInput {
    /// Validate identifiers and build the store update
    pub fn into_update(self) -> ApiResult<ProductUpdate> {
        Ok(ProductUpdate {
            name: self.name,
            category_id: convert_id("categoryId", self.category_id.as_ref())?,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            created: self.created.map(bson::DateTime::from_chrono),
            updated: self.updated.map(bson::DateTime::from_chrono),
        })
    }

    /// Validate identifiers and build a product to insert
    pub fn into_new_product(self) -> ApiResult<NewProduct> {
        Ok(NewProduct {
            name: self.name,
            category_id: convert_id("categoryId", self.category_id.as_ref())?,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            created: self.created.map(bson::DateTime::from_chrono),
            updated: self.updated.map(bson::DateTime::from_chrono),
        })
    }
}
