//! skv-link: client facade for the SKV partitioned key-value store.
//!
//! SKV stores entries under a two-part key: a hash key selecting the
//! partition and a sort key ordering entries within it. This crate is the
//! client-side facade over that cluster: it exposes uniform point, batch, and
//! multi-key operations per named table and hides the work of discovering,
//! caching, and reusing per-table routing state.
//!
//! The facade resolves each table name at most once (concurrent first calls
//! for the same table coalesce onto a single discovery), caches the resolved
//! handle for the client's lifetime, and routes every subsequent call through
//! it. Wire-level discovery and partition routing live behind the
//! [`TableResolver`] and [`TableRouter`] traits, implemented by a transport
//! crate in production and by mocks in tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use skv_link::{GetRequest, SetRequest, SkvClient};
//! use std::time::Duration;
//! # use std::sync::Arc;
//!
//! # async fn example(resolver: Arc<dyn skv_link::TableResolver>) -> skv_link::Result<()> {
//! let client = SkvClient::builder()
//!     .meta_server("10.0.0.1:34601")
//!     .operation_timeout(Duration::from_millis(500))
//!     .resolver(resolver)
//!     .build()?;
//!
//! client
//!     .set("users", SetRequest::new("u1", "profile", "{\"name\":\"alice\"}"))
//!     .await?;
//! let value = client.get("users", GetRequest::new("u1", "profile")).await?;
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod resolver;
pub mod router;
pub mod session;

mod table_cache;

pub use client::{SkvClient, SkvClientBuilder, DEFAULT_OPERATION_TIMEOUT};
pub use error::{Result, SkvLinkError};
pub use models::{
    BatchGetItem, BatchWriteItem, DelRequest, GetRequest, KeyValue, MultiGetRequest,
    MultiGetResult, MultiSetRequest, SetRequest,
};
pub use resolver::TableResolver;
pub use router::TableRouter;
pub use session::ClusterSession;
