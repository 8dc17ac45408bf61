use crate::error::SkvLinkError;
use bytes::Bytes;

/// Per-item outcome of a batch read.
///
/// Items come back in the same order as the request array; each carries
/// either the value (absent keys yield `value: None, error: None`) or the
/// error that failed that item, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchGetItem {
    /// Hash key of the requested item.
    pub hash_key: Bytes,

    /// Sort key of the requested item.
    pub sort_key: Bytes,

    /// The value read, or `None` when the key does not exist.
    pub value: Option<Bytes>,

    /// Error that failed this item, `None` on success.
    pub error: Option<SkvLinkError>,
}

/// Per-item outcome of a batch write, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchWriteItem {
    /// Hash key of the written item.
    pub hash_key: Bytes,

    /// Sort key of the written item.
    pub sort_key: Bytes,

    /// Error that failed this item, `None` on success.
    pub error: Option<SkvLinkError>,
}
