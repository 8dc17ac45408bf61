//! Per-table operation routing seam.
//!
//! A [`TableRouter`] is the handle produced by table discovery. It knows the
//! partition layout of one table and executes single, batch, and multi-key
//! operations against the correct replicas. The facade forwards each request
//! together with its effective timeout (per-call override or facade default);
//! deadline enforcement happens inside the router, not in the facade.

use crate::error::Result;
use crate::models::{
    BatchGetItem, BatchWriteItem, DelRequest, GetRequest, MultiGetRequest, MultiGetResult,
    MultiSetRequest, SetRequest,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

/// Executes operations against one resolved table.
///
/// One router exists per cached table handle; it is shared by every caller
/// operating on that table and lives as long as the owning client.
#[async_trait]
pub trait TableRouter: Send + Sync {
    /// Read one value. `Ok(None)` means the key does not exist.
    async fn get(&self, request: GetRequest, timeout: Duration) -> Result<Option<Bytes>>;

    /// Write one value.
    async fn set(&self, request: SetRequest, timeout: Duration) -> Result<()>;

    /// Delete one value.
    async fn del(&self, request: DelRequest, timeout: Duration) -> Result<()>;

    /// Read a batch of independent keys; results keep request order.
    async fn batch_get(
        &self,
        requests: Vec<GetRequest>,
        timeout: Duration,
    ) -> Result<Vec<BatchGetItem>>;

    /// Write a batch of independent keys; results keep request order.
    async fn batch_set(
        &self,
        requests: Vec<SetRequest>,
        timeout: Duration,
    ) -> Result<Vec<BatchWriteItem>>;

    /// Read several sort keys under one hash key.
    async fn multi_get(
        &self,
        request: MultiGetRequest,
        timeout: Duration,
    ) -> Result<MultiGetResult>;

    /// Write several sort keys under one hash key atomically.
    async fn multi_set(&self, request: MultiSetRequest, timeout: Duration) -> Result<()>;
}
