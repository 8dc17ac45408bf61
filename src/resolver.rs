//! Table discovery seam.
//!
//! The facade never speaks the metadata protocol itself: a [`TableResolver`]
//! implementation (the transport crate in production, a mock in tests) turns
//! a table name into a ready-to-use [`TableRouter`](crate::router::TableRouter).

use crate::error::Result;
use crate::router::TableRouter;
use crate::session::ClusterSession;
use async_trait::async_trait;
use std::sync::Arc;

/// Resolves a table name to its per-table routing handle.
///
/// `discover` is called at most once per table name at a time: concurrent
/// first accesses to the same table are coalesced by the facade's cache, so
/// implementations do not need their own duplicate-request suppression.
///
/// # Errors
///
/// Implementations should report a missing table as
/// [`SkvLinkError::TableNotFound`](crate::SkvLinkError::TableNotFound) and
/// unreachable or timed-out metadata servers as
/// [`SkvLinkError::DiscoveryError`](crate::SkvLinkError::DiscoveryError).
#[async_trait]
pub trait TableResolver: Send + Sync {
    /// Discover the partition/routing metadata for `table_name` using the
    /// connections owned by `session`, and return the routing handle.
    async fn discover(
        &self,
        table_name: &str,
        session: &ClusterSession,
    ) -> Result<Arc<dyn TableRouter>>;
}
