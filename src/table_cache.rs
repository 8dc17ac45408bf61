//! Table handle cache: lazy, coalesced resolution of table names.
//!
//! The cache is the only shared mutable state in the facade. It maps each
//! table name to a per-name [`OnceCell`]; the cell guarantees that concurrent
//! first accesses to an unresolved table coalesce onto a single discovery and
//! that exactly one routing handle ever wins for a given name. A failed
//! discovery leaves the cell empty, so the next call for that table retries
//! (no negative caching). Entries are never removed or replaced; they live as
//! long as the owning client.

use crate::error::Result;
use crate::resolver::TableResolver;
use crate::router::TableRouter;
use crate::session::ClusterSession;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tokio::sync::OnceCell;

type RouterCell = Arc<OnceCell<Arc<dyn TableRouter>>>;

/// Mapping from table name to its resolved (or in-flight) routing handle.
pub(crate) struct TableCache {
    tables: RwLock<HashMap<String, RouterCell>>,
}

impl TableCache {
    pub(crate) fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve `table_name` to its routing handle.
    ///
    /// Cache hits return without any discovery. On a miss, discovery runs via
    /// `resolver`; the map lock is never held across the await, and the
    /// per-name cell serializes duplicate discoveries.
    pub(crate) async fn resolve(
        &self,
        table_name: &str,
        resolver: &dyn TableResolver,
        session: &ClusterSession,
    ) -> Result<Arc<dyn TableRouter>> {
        // Fast path: table already resolved.
        if let Some(cell) = self.lookup(table_name) {
            if let Some(router) = cell.get() {
                return Ok(Arc::clone(router));
            }
        }

        let cell = self.entry(table_name);
        let router = cell
            .get_or_try_init(|| async {
                debug!("[TABLE_CACHE] Discovering table '{}'", table_name);
                let start = Instant::now();
                match resolver.discover(table_name, session).await {
                    Ok(router) => {
                        debug!(
                            "[TABLE_CACHE] Resolved table '{}' in {:?}",
                            table_name,
                            start.elapsed()
                        );
                        Ok(router)
                    }
                    Err(e) => {
                        warn!(
                            "[TABLE_CACHE] Discovery failed for table '{}' after {:?}: {}",
                            table_name,
                            start.elapsed(),
                            e
                        );
                        Err(e)
                    }
                }
            })
            .await?;
        Ok(Arc::clone(router))
    }

    /// Number of tables with a resolved handle.
    pub(crate) fn resolved_len(&self) -> usize {
        self.tables
            .read()
            .unwrap()
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    /// Whether `table_name` currently has a resolved handle.
    pub(crate) fn contains(&self, table_name: &str) -> bool {
        self.tables
            .read()
            .unwrap()
            .get(table_name)
            .is_some_and(|cell| cell.initialized())
    }

    fn lookup(&self, table_name: &str) -> Option<RouterCell> {
        self.tables.read().unwrap().get(table_name).cloned()
    }

    fn entry(&self, table_name: &str) -> RouterCell {
        let mut tables = self.tables.write().unwrap();
        Arc::clone(
            tables
                .entry(table_name.to_string())
                .or_insert_with(|| Arc::new(OnceCell::new())),
        )
    }
}
