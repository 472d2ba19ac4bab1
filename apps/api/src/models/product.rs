//! Product model for the catalog
//!
//! Every application field is optional: clients create products from any
//! subset of fields and later overwrite them field by field.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::id::deserialize_optional_object_id;

/// Product document from the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Category this product belongs to (lookup only, not enforced)
    #[serde(
        rename = "categoryId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_object_id"
    )]
    pub category_id: Option<ObjectId>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Units in stock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<bson::DateTime>,

    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<bson::DateTime>,
}

/// Product creation input, already validated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: Option<String>,
    pub category_id: Option<ObjectId>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub created: Option<bson::DateTime>,
    pub updated: Option<bson::DateTime>,
}

impl NewProduct {
    /// Attach the generated identifier, defaulting `created` to `now`
    pub fn into_product(self, id: ObjectId, now: bson::DateTime) -> Product {
        Product {
            id,
            name: self.name,
            category_id: self.category_id,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            created: Some(self.created.unwrap_or(now)),
            updated: self.updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_into_product_defaults_created() {
        let now = bson::DateTime::now();
        let id = ObjectId::new();
        let product = NewProduct {
            name: Some("Widget".to_string()),
            ..Default::default()
        }
        .into_product(id, now);

        assert_eq!(product.id, id);
        assert_eq!(product.created, Some(now));
        assert!(product.updated.is_none());
    }

    #[test]
    fn test_into_product_keeps_supplied_created() {
        let supplied = bson::DateTime::from_millis(1_500_000_000_000);
        let product = NewProduct {
            created: Some(supplied),
            ..Default::default()
        }
        .into_product(ObjectId::new(), bson::DateTime::now());

        assert_eq!(product.created, Some(supplied));
    }

    #[test]
    fn test_product_serialization_skips_absent_fields() {
        let product = NewProduct {
            name: Some("Widget".to_string()),
            quantity: Some(3),
            ..Default::default()
        }
        .into_product(ObjectId::new(), bson::DateTime::now());

        let document = bson::to_document(&product).unwrap();
        assert_eq!(document.get_str("name").unwrap(), "Widget");
        assert_eq!(document.get_i32("quantity").unwrap(), 3);
        assert!(!document.contains_key("price"));
        assert!(!document.contains_key("categoryId"));
    }

    #[test]
    fn test_product_reads_legacy_document() {
        let id = ObjectId::new();
        let category_id = ObjectId::new();
        let product: Product = bson::from_document(doc! {
            "_id": id,
            "name": "This is Product One",
            "categoryId": category_id.to_hex(),
            "price": 10,
        })
        .unwrap();

        assert_eq!(product.category_id, Some(category_id));
        assert_eq!(product.price, Some(10.0));
        assert!(product.quantity.is_none());
    }

    #[test]
    fn test_product_with_unparseable_category_reference_still_reads() {
        let id = ObjectId::new();
        let product: Product = bson::from_document(doc! {
            "_id": id,
            "name": "Legacy",
            "categoryId": "good",
        })
        .unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.name.as_deref(), Some("Legacy"));
        assert!(product.category_id.is_none());
    }
}
