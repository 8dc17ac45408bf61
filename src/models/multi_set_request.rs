use crate::error::{Result, SkvLinkError};
use crate::models::KeyValue;
use bytes::Bytes;
use std::time::Duration;

/// Request for writing several sort-key/value pairs under one hash key.
///
/// # Examples
///
/// ```rust
/// use skv_link::{KeyValue, MultiSetRequest};
///
/// let request = MultiSetRequest::new(
///     "u1",
///     vec![
///         KeyValue::new("profile", "{\"name\":\"alice\"}"),
///         KeyValue::new("settings", "{\"theme\":\"dark\"}"),
///     ],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSetRequest {
    /// Hash key selecting the partition. Required, non-empty.
    pub hash_key: Bytes,

    /// Ordered sort-key/value pairs to write. Required, non-empty.
    pub entries: Vec<KeyValue>,

    /// Optional time-to-live applied to every written entry.
    pub ttl: Option<Duration>,

    /// Per-call timeout override. When unset, the facade default applies.
    pub timeout: Option<Duration>,
}

impl MultiSetRequest {
    /// Write the given entries under `hash_key`.
    pub fn new(hash_key: impl Into<Bytes>, entries: Vec<KeyValue>) -> Self {
        Self {
            hash_key: hash_key.into(),
            entries,
            ttl: None,
            timeout: None,
        }
    }

    /// Expire every written entry after `ttl`.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
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
        if self.entries.is_empty() {
            return Err(SkvLinkError::InvalidRequest(
                "entries must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
