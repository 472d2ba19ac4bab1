//! Category model for the catalog
//!
//! Categories are owned by the backing store; the API only reads them.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Category document from the `categories` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<bson::DateTime>,
}

/// Category creation input
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<bson::DateTime>,
}

impl NewCategory {
    /// Category with just a name, created now
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            created: Some(bson::DateTime::now()),
        }
    }

    /// Attach the generated identifier
    pub fn into_category(self, id: ObjectId) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
            created: self.created,
        }
    }
}
