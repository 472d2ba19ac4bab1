//! Bulk write result GraphQL type

use async_graphql::SimpleObject;

use crate::models::WriteOutcome;

/// Outcome of a bulk update or delete
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "MongoResultType")]
pub struct MongoResult {
    /// Whether the store acknowledged the write
    pub ok: bool,
    /// Matched documents for updates, removed documents for deletes
    pub n: i32,
    /// Documents whose stored values changed (null for deletes)
    pub n_modified: Option<i32>,
}

/// GraphQL Int is 32 bit; saturate rather than wrap on huge collections
fn saturating_count(count: u64) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

impl From<WriteOutcome> for MongoResult {
    fn from(outcome: WriteOutcome) -> Self {
        Self {
            ok: outcome.acknowledged,
            n: saturating_count(outcome.matched),
            n_modified: outcome.modified.map(saturating_count),
        }
    }
}
