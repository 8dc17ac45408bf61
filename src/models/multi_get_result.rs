use crate::models::KeyValue;

/// Result of a multi-key read: the fetched entries in sort-key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiGetResult {
    /// Entries fetched, ordered by sort key.
    pub entries: Vec<KeyValue>,

    /// False when a `max_kv_count` / `max_kv_size` limit truncated the scan
    /// before all matching entries were read.
    pub all_fetched: bool,
}

impl MultiGetResult {
    /// A complete result containing every matching entry.
    pub fn complete(entries: Vec<KeyValue>) -> Self {
        Self {
            entries,
            all_fetched: true,
        }
    }

    /// A result truncated by a count or size limit.
    pub fn truncated(entries: Vec<KeyValue>) -> Self {
        Self {
            entries,
            all_fetched: false,
        }
    }
}
