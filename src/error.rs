//! Error types for the skv-link client library.

use thiserror::Error;

/// Errors surfaced by the SKV client facade.
///
/// The facade never retries or translates errors: whatever discovery or the
/// per-table router reports is handed back to the caller verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkvLinkError {
    /// Invalid client configuration (missing metadata servers, no resolver).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The requested table does not exist in the cluster.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Table discovery failed (metadata node unreachable, discovery timed out).
    #[error("Discovery error: {0}")]
    DiscoveryError(String),

    /// A routed operation failed (replica unreachable, constraint violation).
    #[error("Operation error: {0}")]
    OperationError(String),

    /// A routed operation exceeded its effective timeout.
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// The request is malformed at the facade layer (required key missing).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The client has been closed; no further operations are accepted.
    #[error("Client is closed")]
    ClientClosed,
}

impl SkvLinkError {
    /// True for errors raised during table discovery rather than dispatch.
    pub fn is_discovery_error(&self) -> bool {
        matches!(
            self,
            SkvLinkError::TableNotFound(_) | SkvLinkError::DiscoveryError(_)
        )
    }
}

/// Result type for skv-link operations.
pub type Result<T> = std::result::Result<T, SkvLinkError>;
