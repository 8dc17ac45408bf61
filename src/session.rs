//! Cluster session: the configuration snapshot shared by every table.
//!
//! A [`ClusterSession`] is created once per client and handed to the
//! [`TableResolver`](crate::resolver::TableResolver) on every discovery.
//! It carries the ordered metadata-server list and the facade-wide operation
//! timeout, and tracks the closed flag that makes `close()` idempotent.

use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Connection-level state shared by all tables resolved through one client.
///
/// The session does not open sockets itself; the transport layer implementing
/// [`TableResolver`](crate::resolver::TableResolver) and
/// [`TableRouter`](crate::router::TableRouter) owns the physical connections
/// and reads its endpoints and deadline budget from here.
#[derive(Debug)]
pub struct ClusterSession {
    meta_servers: Vec<String>,
    operation_timeout: Duration,
    closed: AtomicBool,
}

impl ClusterSession {
    pub(crate) fn new(meta_servers: Vec<String>, operation_timeout: Duration) -> Self {
        Self {
            meta_servers,
            operation_timeout,
            closed: AtomicBool::new(false),
        }
    }

    /// Ordered `host:port` addresses of the cluster's metadata servers.
    pub fn meta_servers(&self) -> &[String] {
        &self.meta_servers
    }

    /// Facade-wide default operation timeout.
    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    /// Whether the owning client has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Mark the session closed. Safe to call more than once; only the first
    /// call has any effect.
    pub(crate) fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!(
                "[SESSION] Closed session (meta_servers={:?})",
                self.meta_servers
            );
        }
    }
}
