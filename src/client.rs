//! Main SKV client with builder pattern.
//!
//! The client is a thin facade over the cluster: it resolves each table name
//! to a routing handle (once, lazily, cached for the client's lifetime) and
//! forwards every operation to that handle with an effective timeout.

use crate::{
    error::{Result, SkvLinkError},
    models::{
        effective_timeout, BatchGetItem, BatchWriteItem, DelRequest, GetRequest, MultiGetRequest,
        MultiGetResult, MultiSetRequest, SetRequest,
    },
    resolver::TableResolver,
    router::TableRouter,
    session::ClusterSession,
    table_cache::TableCache,
};
use bytes::Bytes;
use log::debug;
use std::{sync::Arc, time::Duration};

/// Default operation timeout applied when the builder leaves it unset.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(1000);

/// Main SKV client.
///
/// Use [`SkvClientBuilder`] to construct instances. The client is cheap to
/// clone; clones share the same session and table cache.
///
/// # Examples
///
/// ```rust,no_run
/// use skv_link::{GetRequest, SkvClient};
/// use std::time::Duration;
/// # use std::sync::Arc;
/// # async fn example(resolver: Arc<dyn skv_link::TableResolver>) -> skv_link::Result<()> {
/// let client = SkvClient::builder()
///     .meta_server("10.0.0.1:34601")
///     .meta_server("10.0.0.2:34601")
///     .operation_timeout(Duration::from_millis(500))
///     .resolver(resolver)
///     .build()?;
///
/// let value = client.get("users", GetRequest::new("u1", "profile")).await?;
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SkvClient {
    session: Arc<ClusterSession>,
    resolver: Arc<dyn TableResolver>,
    tables: Arc<TableCache>,
}

impl SkvClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> SkvClientBuilder {
        SkvClientBuilder::new()
    }

    /// Read one value. `Ok(None)` means the key does not exist.
    pub async fn get(&self, table_name: &str, request: GetRequest) -> Result<Option<Bytes>> {
        self.ensure_open()?;
        request.validate()?;
        let timeout = effective_timeout(request.timeout, self.operation_timeout());
        let router = self.resolve(table_name).await?;
        router.get(request, timeout).await
    }

    /// Write one value, optionally with a TTL.
    pub async fn set(&self, table_name: &str, request: SetRequest) -> Result<()> {
        self.ensure_open()?;
        request.validate()?;
        let timeout = effective_timeout(request.timeout, self.operation_timeout());
        let router = self.resolve(table_name).await?;
        router.set(request, timeout).await
    }

    /// Delete one value.
    pub async fn del(&self, table_name: &str, request: DelRequest) -> Result<()> {
        self.ensure_open()?;
        request.validate()?;
        let timeout = effective_timeout(request.timeout, self.operation_timeout());
        let router = self.resolve(table_name).await?;
        router.del(request, timeout).await
    }

    /// Read a batch of independent keys. Per-item outcomes keep request
    /// order; the whole call fails only on resolution or transport failure.
    pub async fn batch_get(
        &self,
        table_name: &str,
        requests: Vec<GetRequest>,
    ) -> Result<Vec<BatchGetItem>> {
        self.ensure_open()?;
        if requests.is_empty() {
            return Err(SkvLinkError::InvalidRequest(
                "batch_get requires at least one request".to_string(),
            ));
        }
        for request in &requests {
            request.validate()?;
        }
        let timeout = self.operation_timeout();
        let router = self.resolve(table_name).await?;
        router.batch_get(requests, timeout).await
    }

    /// Write a batch of independent keys. Per-item outcomes keep request
    /// order.
    pub async fn batch_set(
        &self,
        table_name: &str,
        requests: Vec<SetRequest>,
    ) -> Result<Vec<BatchWriteItem>> {
        self.ensure_open()?;
        if requests.is_empty() {
            return Err(SkvLinkError::InvalidRequest(
                "batch_set requires at least one request".to_string(),
            ));
        }
        for request in &requests {
            request.validate()?;
        }
        let timeout = self.operation_timeout();
        let router = self.resolve(table_name).await?;
        router.batch_set(requests, timeout).await
    }

    /// Read several sort keys under one hash key.
    pub async fn multi_get(
        &self,
        table_name: &str,
        request: MultiGetRequest,
    ) -> Result<MultiGetResult> {
        self.ensure_open()?;
        request.validate()?;
        let timeout = effective_timeout(request.timeout, self.operation_timeout());
        let router = self.resolve(table_name).await?;
        router.multi_get(request, timeout).await
    }

    /// Write several sort keys under one hash key atomically.
    pub async fn multi_set(&self, table_name: &str, request: MultiSetRequest) -> Result<()> {
        self.ensure_open()?;
        request.validate()?;
        let timeout = effective_timeout(request.timeout, self.operation_timeout());
        let router = self.resolve(table_name).await?;
        router.multi_set(request, timeout).await
    }

    /// Close the client and its session.
    ///
    /// Idempotent. Every operation issued after the first `close` fails with
    /// [`SkvLinkError::ClientClosed`]; in-flight operations run to
    /// completion. Cached table handles are dropped together with the client.
    pub fn close(&self) {
        self.session.close();
    }

    /// Whether this client has been closed.
    pub fn is_closed(&self) -> bool {
        self.session.is_closed()
    }

    /// Number of tables with a resolved, cached routing handle.
    pub fn cached_table_count(&self) -> usize {
        self.tables.resolved_len()
    }

    /// Whether `table_name` currently has a resolved handle in the cache.
    /// False both for never-accessed tables and for tables whose discovery
    /// has only ever failed.
    pub fn has_cached_table(&self, table_name: &str) -> bool {
        self.tables.contains(table_name)
    }

    /// The facade-wide default operation timeout.
    pub fn operation_timeout(&self) -> Duration {
        self.session.operation_timeout()
    }

    /// The cluster session shared by all tables of this client.
    pub fn session(&self) -> &ClusterSession {
        &self.session
    }

    async fn resolve(&self, table_name: &str) -> Result<Arc<dyn TableRouter>> {
        self.tables
            .resolve(table_name, self.resolver.as_ref(), &self.session)
            .await
    }

    fn ensure_open(&self) -> Result<()> {
        if self.session.is_closed() {
            return Err(SkvLinkError::ClientClosed);
        }
        Ok(())
    }
}

/// Builder for configuring [`SkvClient`] instances.
pub struct SkvClientBuilder {
    meta_servers: Vec<String>,
    operation_timeout: Duration,
    resolver: Option<Arc<dyn TableResolver>>,
}

impl SkvClientBuilder {
    fn new() -> Self {
        Self {
            meta_servers: Vec::new(),
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
            resolver: None,
        }
    }

    /// Add one `host:port` metadata-server address. At least one is required.
    pub fn meta_server(mut self, address: impl Into<String>) -> Self {
        self.meta_servers.push(address.into());
        self
    }

    /// Replace the metadata-server address list.
    pub fn meta_servers(mut self, addresses: Vec<String>) -> Self {
        self.meta_servers = addresses;
        self
    }

    /// Set the facade-wide default operation timeout.
    ///
    /// A zero duration is treated as unset and replaced by
    /// [`DEFAULT_OPERATION_TIMEOUT`].
    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Set the table resolver performing wire-level partition discovery.
    pub fn resolver(mut self, resolver: Arc<dyn TableResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`SkvLinkError::ConfigurationError`] when the
    /// metadata-server list is empty or no resolver was supplied.
    pub fn build(self) -> Result<SkvClient> {
        if self.meta_servers.is_empty() {
            return Err(SkvLinkError::ConfigurationError(
                "at least one meta server address is required".to_string(),
            ));
        }
        let resolver = self.resolver.ok_or_else(|| {
            SkvLinkError::ConfigurationError("a table resolver is required".to_string())
        })?;
        let operation_timeout = if self.operation_timeout.is_zero() {
            DEFAULT_OPERATION_TIMEOUT
        } else {
            self.operation_timeout
        };

        debug!(
            "[CLIENT] Creating client (meta_servers={:?}, operation_timeout={:?})",
            self.meta_servers, operation_timeout
        );

        Ok(SkvClient {
            session: Arc::new(ClusterSession::new(self.meta_servers, operation_timeout)),
            resolver,
            tables: Arc::new(TableCache::new()),
        })
    }
}
