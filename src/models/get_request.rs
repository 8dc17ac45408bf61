use crate::error::{Result, SkvLinkError};
use bytes::Bytes;
use std::time::Duration;

/// Request for a point read.
///
/// # Examples
///
/// ```rust
/// use skv_link::GetRequest;
/// use std::time::Duration;
///
/// let request = GetRequest::new("u1", "profile");
///
/// // With a per-call timeout override
/// let request = GetRequest::new("u1", "profile").with_timeout(Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    /// Hash key selecting the partition. Required, non-empty.
    pub hash_key: Bytes,

    /// Sort key within the partition. May be empty.
    pub sort_key: Bytes,

    /// Per-call timeout override. When unset, the facade default applies.
    pub timeout: Option<Duration>,
}

impl GetRequest {
    /// Create a read request for `(hash_key, sort_key)`.
    pub fn new(hash_key: impl Into<Bytes>, sort_key: impl Into<Bytes>) -> Self {
        Self {
            hash_key: hash_key.into(),
            sort_key: sort_key.into(),
            timeout: None,
        }
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
