//! Cached blacklist lookups.
//!
//! One lookup answers "what does `list` say about `address`":
//!
//! ```text
//! cache key ──hit──▶ cached records (no DNS traffic)
//!     │
//!    miss
//!     ▼
//! query name ──▶ DnsTransport (A + TXT) ──▶ cache ──▶ records
//! ```
//!
//! Listed answers are cached for the first record's TTL. Empty answers and
//! transport failures are both cached as "not listed" for [`NEGATIVE_TTL`],
//! which bounds how often a dead list is retried at the cost of hiding
//! transient resolver trouble for up to an hour.

use crate::address::Classification;
use crate::cache::{CacheStore, cache_key};
use crate::query_name::build_query_name;
use crate::record::{DnsRecord, RecordKind};
use crate::transport::DnsTransport;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// How long "not listed" (or "could not tell") is remembered.
pub const NEGATIVE_TTL: Duration = Duration::from_secs(3600);

/// Performs single-list lookups through a cache.
#[derive(Clone)]
pub struct LookupEngine {
    transport: Arc<dyn DnsTransport>,
    cache: Arc<dyn CacheStore>,
}

impl LookupEngine {
    pub fn new(transport: Arc<dyn DnsTransport>, cache: Arc<dyn CacheStore>) -> Self {
        Self { transport, cache }
    }

    /// Records `list_host` publishes for `address`; empty means not listed.
    ///
    /// Never fails: transport errors are logged and read as "not listed".
    pub async fn lookup(
        &self,
        address: &str,
        classification: Classification,
        list_host: &str,
    ) -> Vec<DnsRecord> {
        let key = cache_key(address, list_host);

        if let Some(records) = self.cache.get(&key) {
            debug!(address = %address, list = %list_host, listed = !records.is_empty(), "Cache hit");
            return records;
        }

        let query = match build_query_name(address, classification, list_host) {
            Ok(query) => query,
            Err(e) => {
                debug!(address = %address, list = %list_host, reason = %e, "Skipping lookup");
                return Vec::new();
            }
        };

        debug!(query = %query, "Cache miss, querying blacklist");

        let records = match self.transport.query(&query, &RecordKind::LOOKUP).await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    query = %query,
                    list = %list_host,
                    error = %e,
                    code = e.error_code(),
                    "Blacklist lookup failed, treating as not listed"
                );
                Vec::new()
            }
        };

        // The first record's TTL stands for the whole answer, not the minimum.
        let ttl = match records.first() {
            Some(first) => {
                debug!(address = %address, list = %list_host, records = records.len(), "Listed");
                Duration::from_secs(u64::from(first.ttl))
            }
            None => NEGATIVE_TTL,
        };

        self.cache.set(&key, records.clone(), ttl);
        records
    }
}
