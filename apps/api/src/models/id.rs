//! Identifier conversion between the external string form and ObjectId
//!
//! Every string identifier coming from a client passes through
//! [`parse_object_id`] before it reaches a store.

use bson::oid::ObjectId;
use bson::Bson;
use serde::{de, Deserialize, Deserializer};

use crate::error::{ApiError, ApiResult};

/// Convert an external identifier into an ObjectId
///
/// `field` names the argument the value came from so the client can tell
/// which identifier was rejected.
pub fn parse_object_id(field: &'static str, value: &str) -> ApiResult<ObjectId> {
    ObjectId::parse_str(value).map_err(|_| ApiError::invalid_id(field, value))
}

/// Convert an optional external identifier, keeping absence as `None`
pub fn parse_optional_object_id(
    field: &'static str,
    value: Option<&str>,
) -> ApiResult<Option<ObjectId>> {
    value.map(|v| parse_object_id(field, v)).transpose()
}

/// Deserialize a reference that older documents stored as a string
///
/// Documents written by earlier clients kept `categoryId` as the raw string
/// the client sent; newer ones store a native ObjectId. A string that is not
/// a hex ObjectId cannot point at any category, so it reads as `None` rather
/// than failing the whole document.
pub fn deserialize_optional_object_id<'de, D>(deserializer: D) -> Result<Option<ObjectId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::ObjectId(oid)) => Ok(Some(oid)),
        Some(Bson::String(s)) => match ObjectId::parse_str(&s) {
            Ok(oid) => Ok(Some(oid)),
            Err(e) => {
                tracing::warn!(value = %s, error = %e, "Ignoring unparseable stored reference");
                Ok(None)
            }
        },
        Some(other) => Err(de::Error::custom(format!(
            "expected ObjectId, found {:?}",
            other.element_type()
        ))),
    }
}
