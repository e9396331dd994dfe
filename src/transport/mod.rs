//! DNS transport seam.
//!
//! The lookup engine hands a fully-qualified name and the record types it
//! wants to a [`DnsTransport`] and gets normalized records back. Timeouts and
//! attempt counts are the transport's business.

mod hickory;

pub use hickory::HickoryTransport;

use crate::error::TransportError;
use crate::record::{DnsRecord, RecordKind};
use async_trait::async_trait;

/// Resolves blacklist query names.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Query `name` for each of `kinds`, returning every answer record in
    /// order. An empty vector means the name does not exist or has no
    /// records of those types.
    async fn query(&self, name: &str, kinds: &[RecordKind])
    -> Result<Vec<DnsRecord>, TransportError>;
}
