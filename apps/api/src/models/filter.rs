//! Product filters and updates
//!
//! [`ProductFilter`] and [`ProductUpdate`] hold already-validated values, with
//! every field independently optional. Each store translates them its own way:
//! the in-memory store evaluates [`ProductFilter::matches`] and
//! [`ProductUpdate::apply`], MongoDB receives [`ProductFilter::to_document`]
//! and [`ProductUpdate::to_set_document`].

use bson::oid::ObjectId;
use bson::{doc, Document};

use super::product::Product;

/// Which products a query or bulk mutation applies to
///
/// A filter with no fields set matches every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact identifier
    pub id: Option<ObjectId>,
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Exact category reference
    pub category_id: Option<ObjectId>,
    /// Exact description
    pub description: Option<String>,
    /// Exact price
    pub price: Option<f64>,
    /// Exact quantity
    pub quantity: Option<i32>,
}

impl ProductFilter {
    /// Filter matching every product
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching the single product with this identifier
    pub fn by_id(id: ObjectId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// True when no field narrows the match set
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }

    /// Evaluate the filter against a product
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(id) = &self.id {
            if product.id != *id {
                return false;
            }
        }

        if let Some(needle) = &self.name {
            let needle = needle.to_lowercase();
            let contains = product
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
            if !contains {
                return false;
            }
        }

        if self.category_id.is_some() && product.category_id != self.category_id {
            return false;
        }

        if self.description.is_some() && product.description != self.description {
            return false;
        }

        if self.price.is_some() && product.price != self.price {
            return false;
        }

        if self.quantity.is_some() && product.quantity != self.quantity {
            return false;
        }

        true
    }

    /// MongoDB query document for this filter
    ///
    /// The name becomes an escaped, case-insensitive `$regex` so client input
    /// is matched literally. A category reference matches both the native
    /// ObjectId and its hex string form.
    pub fn to_document(&self) -> Document {
        let mut query = Document::new();

        if let Some(id) = self.id {
            query.insert("_id", id);
        }
        if let Some(name) = &self.name {
            query.insert(
                "name",
                doc! { "$regex": regex::escape(name), "$options": "i" },
            );
        }
        if let Some(category_id) = self.category_id {
            // Older documents hold the reference as a hex string
            query.insert(
                "categoryId",
                doc! { "$in": [category_id, category_id.to_hex()] },
            );
        }
        if let Some(description) = &self.description {
            query.insert("description", description.as_str());
        }
        if let Some(price) = self.price {
            query.insert("price", price);
        }
        if let Some(quantity) = self.quantity {
            query.insert("quantity", quantity);
        }

        query
    }
}

/// Field-level overwrite applied to every matched product
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category_id: Option<ObjectId>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub created: Option<bson::DateTime>,
    pub updated: Option<bson::DateTime>,
}

impl ProductUpdate {
    /// True when the update would not touch any field
    pub fn is_empty(&self) -> bool {
        self.to_set_document().is_empty()
    }

    /// Overwrite the provided fields, returning whether anything changed
    pub fn apply(&self, product: &mut Product) -> bool {
        let before = product.clone();

        if let Some(name) = &self.name {
            product.name = Some(name.clone());
        }
        if let Some(category_id) = self.category_id {
            product.category_id = Some(category_id);
        }
        if let Some(description) = &self.description {
            product.description = Some(description.clone());
        }
        if let Some(price) = self.price {
            product.price = Some(price);
        }
        if let Some(quantity) = self.quantity {
            product.quantity = Some(quantity);
        }
        if let Some(created) = self.created {
            product.created = Some(created);
        }
        if let Some(updated) = self.updated {
            product.updated = Some(updated);
        }

        *product != before
    }

    /// Body of the MongoDB `$set` operator for this update
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();

        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(category_id) = self.category_id {
            set.insert("categoryId", category_id);
        }
        if let Some(description) = &self.description {
            set.insert("description", description.as_str());
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(quantity) = self.quantity {
            set.insert("quantity", quantity);
        }
        if let Some(created) = self.created {
            set.insert("created", created);
        }
        if let Some(updated) = self.updated {
            set.insert("updated", updated);
        }

        set
    }
}
