//! Outcome of bulk write operations

/// Acknowledgement and counts returned by bulk updates and deletes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Whether the store acknowledged the write
    pub acknowledged: bool,
    /// Matched documents for updates, removed documents for deletes
    pub matched: u64,
    /// Documents whose stored values changed; `None` for deletes
    pub modified: Option<u64>,
}

impl WriteOutcome {
    /// Outcome of a bulk update
    pub fn updated(matched: u64, modified: u64) -> Self {
        Self {
            acknowledged: true,
            matched,
            modified: Some(modified),
        }
    }

    /// Outcome of a bulk delete
    pub fn deleted(removed: u64) -> Self {
        Self {
            acknowledged: true,
            matched: removed,
            modified: None,
        }
    }
}
