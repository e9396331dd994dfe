//! Lookup result caching.
//!
//! The lookup engine only talks to [`CacheStore`]; which store backs it is a
//! wiring decision. [`MemoryCache`] is substituted when none is configured.

mod file;
mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;

use crate::record::DnsRecord;
use std::time::Duration;

/// Prefix shared by every key this crate writes.
pub const KEY_PREFIX: &str = "dnsrbl";

/// Get/set-with-expiry capability backing the lookup cache.
///
/// An empty record vector is a valid cached value meaning "queried, not
/// listed"; `get` must distinguish it from a miss.
pub trait CacheStore: Send + Sync {
    /// Fetch the records stored under `key`, or `None` if absent or expired.
    fn get(&self, key: &str) -> Option<Vec<DnsRecord>>;

    /// Store `records` under `key` for `ttl`.
    fn set(&self, key: &str, records: Vec<DnsRecord>, ttl: Duration);
}

/// Cache key for an (address, list) pair.
///
/// The address is length-prefixed, so any string may appear in it (the `|`
/// separator included) without two pairs sharing a key.
pub fn cache_key(address: &str, list_host: &str) -> String {
    format!("{KEY_PREFIX}|{}:{address}|{list_host}", address.len())
}
