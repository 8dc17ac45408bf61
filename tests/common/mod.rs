#![allow(dead_code)]
//! Shared mock resolver/router for facade-level tests.
//!
//! `MockResolver` stands in for the wire-level discovery layer and
//! `MockRouter` for per-table partition routing. The router records every
//! call it receives (request plus effective timeout) so tests can assert that
//! the facade forwards arguments unchanged.

use async_trait::async_trait;
use bytes::Bytes;
use skv_link::{
    BatchGetItem, BatchWriteItem, ClusterSession, DelRequest, GetRequest, KeyValue,
    MultiGetRequest, MultiGetResult, MultiSetRequest, Result, SetRequest, SkvLinkError,
    TableResolver, TableRouter,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded router invocation: the request as received plus the
/// effective timeout the facade computed.
#[derive(Debug, Clone)]
pub enum RouterCall {
    Get(GetRequest, Duration),
    Set(SetRequest, Duration),
    Del(DelRequest, Duration),
    BatchGet(Vec<GetRequest>, Duration),
    BatchSet(Vec<SetRequest>, Duration),
    MultiGet(MultiGetRequest, Duration),
    MultiSet(MultiSetRequest, Duration),
}

/// Routing handle that records calls and answers from a canned value.
pub struct MockRouter {
    table: String,
    canned_value: Option<Bytes>,
    calls: Mutex<Vec<RouterCall>>,
}

impl MockRouter {
    pub fn new(table: impl Into<String>, canned_value: Option<Bytes>) -> Self {
        Self {
            table: table.into(),
            canned_value,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Snapshot of every call received so far, in order.
    pub fn calls(&self) -> Vec<RouterCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RouterCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TableRouter for MockRouter {
    async fn get(&self, request: GetRequest, timeout: Duration) -> Result<Option<Bytes>> {
        self.record(RouterCall::Get(request, timeout));
        Ok(self.canned_value.clone())
    }

    async fn set(&self, request: SetRequest, timeout: Duration) -> Result<()> {
        self.record(RouterCall::Set(request, timeout));
        Ok(())
    }

    async fn del(&self, request: DelRequest, timeout: Duration) -> Result<()> {
        self.record(RouterCall::Del(request, timeout));
        Ok(())
    }

    async fn batch_get(
        &self,
        requests: Vec<GetRequest>,
        timeout: Duration,
    ) -> Result<Vec<BatchGetItem>> {
        self.record(RouterCall::BatchGet(requests.clone(), timeout));
        Ok(requests
            .into_iter()
            .map(|r| BatchGetItem {
                hash_key: r.hash_key,
                sort_key: r.sort_key,
                value: self.canned_value.clone(),
                error: None,
            })
            .collect())
    }

    async fn batch_set(
        &self,
        requests: Vec<SetRequest>,
        timeout: Duration,
    ) -> Result<Vec<BatchWriteItem>> {
        self.record(RouterCall::BatchSet(requests.clone(), timeout));
        Ok(requests
            .into_iter()
            .map(|r| BatchWriteItem {
                hash_key: r.hash_key,
                sort_key: r.sort_key,
                error: None,
            })
            .collect())
    }

    async fn multi_get(
        &self,
        request: MultiGetRequest,
        timeout: Duration,
    ) -> Result<MultiGetResult> {
        self.record(RouterCall::MultiGet(request.clone(), timeout));
        let value = self.canned_value.clone().unwrap_or_else(Bytes::new);
        Ok(MultiGetResult::complete(
            request
                .sort_keys
                .into_iter()
                .map(|sk| KeyValue::new(sk, value.clone()))
                .collect(),
        ))
    }

    async fn multi_set(&self, request: MultiSetRequest, timeout: Duration) -> Result<()> {
        self.record(RouterCall::MultiSet(request, timeout));
        Ok(())
    }
}

/// Discovery layer stand-in: counts attempts, simulates missing tables and
/// transient metadata failures, and keeps every handed-out router so tests
/// can inspect what it received.
pub struct MockResolver {
    discoveries: AtomicUsize,
    missing_tables: HashSet<String>,
    fail_next: AtomicUsize,
    delay: Duration,
    canned_value: Option<Bytes>,
    routers: Mutex<HashMap<String, Arc<MockRouter>>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self {
            discoveries: AtomicUsize::new(0),
            missing_tables: HashSet::new(),
            fail_next: AtomicUsize::new(0),
            delay: Duration::ZERO,
            canned_value: None,
            routers: Mutex::new(HashMap::new()),
        }
    }

    /// Serve `value` from every router this resolver creates.
    pub fn with_value(mut self, value: impl Into<Bytes>) -> Self {
        self.canned_value = Some(value.into());
        self
    }

    /// Treat `table` as nonexistent: discovery yields `TableNotFound`.
    pub fn with_missing_table(mut self, table: impl Into<String>) -> Self {
        self.missing_tables.insert(table.into());
        self
    }

    /// Sleep this long inside each discovery, so concurrent first calls
    /// genuinely overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fail the next `n` discoveries with a transient `DiscoveryError`.
    pub fn fail_next(&self, n: usize) {
        self.fail_next.store(n, Ordering::SeqCst);
    }

    /// Total discovery attempts observed.
    pub fn discoveries(&self) -> usize {
        self.discoveries.load(Ordering::SeqCst)
    }

    /// The router handed out for `table`, if discovery succeeded.
    pub fn router(&self, table: &str) -> Option<Arc<MockRouter>> {
        self.routers.lock().unwrap().get(table).cloned()
    }

    /// Number of distinct routers created.
    pub fn router_count(&self) -> usize {
        self.routers.lock().unwrap().len()
    }
}

#[async_trait]
impl TableResolver for MockResolver {
    async fn discover(
        &self,
        table_name: &str,
        _session: &ClusterSession,
    ) -> Result<Arc<dyn TableRouter>> {
        self.discoveries.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.missing_tables.contains(table_name) {
            return Err(SkvLinkError::TableNotFound(table_name.to_string()));
        }
        if self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(SkvLinkError::DiscoveryError(format!(
                "meta server unreachable while resolving '{}'",
                table_name
            )));
        }
        let router = Arc::new(MockRouter::new(table_name, self.canned_value.clone()));
        self.routers
            .lock()
            .unwrap()
            .insert(table_name.to_string(), Arc::clone(&router));
        Ok(router)
    }
}
