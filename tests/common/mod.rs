//! Integration test common infrastructure.
//!
//! Provides a scripted DNS transport that answers like the public test
//! entries of well-known blacklists, and a cache that records every write.

pub mod cache;
pub mod transport;

#[allow(unused_imports)]
pub use cache::RecordingCache;
#[allow(unused_imports)]
pub use transport::MockTransport;

use dnsrbl::{CacheStore, DnsTransport, DnsrblService, ListSet};
use std::sync::Arc;

/// Build a list set from string slices.
#[allow(dead_code)]
pub fn lists(dnsbl: &[&str], surbl: &[&str]) -> ListSet {
    ListSet::new(
        dnsbl.iter().map(|s| s.to_string()).collect(),
        surbl.iter().map(|s| s.to_string()).collect(),
    )
}

/// Service over `transport` with the default in-memory cache.
#[allow(dead_code)]
pub fn service(lists: ListSet, transport: &Arc<MockTransport>) -> DnsrblService {
    DnsrblService::new(lists, None, transport.clone() as Arc<dyn DnsTransport>)
}

/// Service over `transport` with an explicit cache.
#[allow(dead_code)]
pub fn service_with_cache(
    lists: ListSet,
    transport: &Arc<MockTransport>,
    cache: Arc<dyn CacheStore>,
) -> DnsrblService {
    DnsrblService::new(lists, Some(cache), transport.clone() as Arc<dyn DnsTransport>)
}
