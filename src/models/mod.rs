//! Data models for the skv-link client library.
//!
//! Defines the per-call request records and the result shapes returned by
//! point, batch, and multi-key operations.

pub mod batch_result;
pub mod del_request;
pub mod get_request;
pub mod key_value;
pub mod multi_get_request;
pub mod multi_get_result;
pub mod multi_set_request;
pub mod set_request;


pub use batch_result::{BatchGetItem, BatchWriteItem};
pub use del_request::DelRequest;
pub use get_request::GetRequest;
pub use key_value::KeyValue;
pub use multi_get_request::MultiGetRequest;
pub use multi_get_result::MultiGetResult;
pub use multi_set_request::MultiSetRequest;
pub use set_request::SetRequest;

use std::time::Duration;

/// Pick the effective deadline for one call: the per-call override when it is
/// set and non-zero, the facade-wide default otherwise.
pub(crate) fn effective_timeout(per_call: Option<Duration>, default: Duration) -> Duration {
    match per_call {
        Some(t) if !t.is_zero() => t,
        _ => default,
    }
}
