//! In-process cache store.

use super::CacheStore;
use crate::record::DnsRecord;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Cached records with expiry.
#[derive(Debug, Clone)]
struct CachedRecords {
    records: Vec<DnsRecord>,
    expires_at: Instant,
}

impl CachedRecords {
    fn is_expired(&self) -> bool {
        self.expires_at <= Instant::now()
    }
}

/// Unbounded in-memory cache living as long as the process.
///
/// Expired entries are skipped on read and dropped by [`purge_expired`](Self::purge_expired).
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, CachedRecords>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry.
    pub fn purge_expired(&self) {
        self.entries.retain(|_, v| !v.is_expired());
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<DnsRecord>> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            return None;
        }
        Some(entry.records.clone())
    }

    fn set(&self, key: &str, records: Vec<DnsRecord>, ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            CachedRecords {
                records,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}
