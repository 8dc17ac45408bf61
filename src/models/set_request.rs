use crate::error::{Result, SkvLinkError};
use bytes::Bytes;
use std::time::Duration;

/// Request for a point write.
///
/// # Examples
///
/// ```rust
/// use skv_link::SetRequest;
/// use std::time::Duration;
///
/// let request = SetRequest::new("u1", "profile", "{\"name\":\"alice\"}");
///
/// // Expire the entry after one hour
/// let request = SetRequest::new("u1", "session", "token")
///     .with_ttl(Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRequest {
    /// Hash key selecting the partition. Required, non-empty.
    pub hash_key: Bytes,

    /// Sort key within the partition. May be empty.
    pub sort_key: Bytes,

    /// Value bytes to store.
    pub value: Bytes,

    /// Optional time-to-live; the entry expires once it elapses.
    pub ttl: Option<Duration>,

    /// Per-call timeout override. When unset, the facade default applies.
    pub timeout: Option<Duration>,
}

impl SetRequest {
    /// Create a write request for `(hash_key, sort_key) -> value`.
    pub fn new(
        hash_key: impl Into<Bytes>,
        sort_key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Self {
        Self {
            hash_key: hash_key.into(),
            sort_key: sort_key.into(),
            value: value.into(),
            ttl: None,
            timeout: None,
        }
    }

    /// Expire the written entry after `ttl`.
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
        Ok(())
    }
}
