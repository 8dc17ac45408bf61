use bytes::Bytes;

/// A sort-key/value pair under a single hash key.
///
/// Used as the input unit of [`MultiSetRequest`](super::MultiSetRequest) and
/// the output unit of [`MultiGetResult`](super::MultiGetResult).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Sort key ordering the entry within its hash-key partition.
    pub sort_key: Bytes,

    /// Raw value bytes.
    pub value: Bytes,
}

impl KeyValue {
    /// Create a new sort-key/value pair.
    pub fn new(sort_key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            sort_key: sort_key.into(),
            value: value.into(),
        }
    }
}
