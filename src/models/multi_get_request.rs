use crate::error::{Result, SkvLinkError};
use bytes::Bytes;
use std::time::Duration;

/// Request for reading several sort keys under one hash key.
///
/// An empty `sort_keys` list asks for every entry under the hash key, subject
/// to the `max_kv_count` / `max_kv_size` limits.
///
/// # Examples
///
/// ```rust
/// use skv_link::MultiGetRequest;
///
/// // Read two specific sort keys
/// let request = MultiGetRequest::new("u1", vec!["profile".into(), "settings".into()]);
///
/// // Scan everything under the hash key, capped at 100 entries
/// let request = MultiGetRequest::all("u1").with_max_kv_count(100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiGetRequest {
    /// Hash key selecting the partition. Required, non-empty.
    pub hash_key: Bytes,

    /// Sort keys to fetch; empty means all entries under the hash key.
    pub sort_keys: Vec<Bytes>,

    /// Stop after this many entries. Unset means no count limit.
    pub max_kv_count: Option<usize>,

    /// Stop once the accumulated key+value bytes exceed this size.
    /// Unset means no size limit.
    pub max_kv_size: Option<usize>,

    /// Per-call timeout override. When unset, the facade default applies.
    pub timeout: Option<Duration>,
}

impl MultiGetRequest {
    /// Read the given sort keys under `hash_key`.
    pub fn new(hash_key: impl Into<Bytes>, sort_keys: Vec<Bytes>) -> Self {
        Self {
            hash_key: hash_key.into(),
            sort_keys,
            max_kv_count: None,
            max_kv_size: None,
            timeout: None,
        }
    }

    /// Read every entry under `hash_key`.
    pub fn all(hash_key: impl Into<Bytes>) -> Self {
        Self::new(hash_key, Vec::new())
    }

    /// Cap the number of returned entries.
    pub fn with_max_kv_count(mut self, count: usize) -> Self {
        self.max_kv_count = Some(count);
        self
    }

    /// Cap the accumulated size of returned entries, in bytes.
    pub fn with_max_kv_size(mut self, size: usize) -> Self {
        self.max_kv_size = Some(size);
        self
    }

    /// Override the facade-wide timeout for this call only.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.hash_key.is_empty() {
            return Err(SkvLinkError::InvalidRequest(
                "hash_key is required".to_string(),
            ));
        }
        Ok(())
    }
}
