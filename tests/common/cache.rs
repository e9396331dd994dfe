//! Cache wrapper recording writes.

#![allow(dead_code)]

use dnsrbl::{CacheStore, DnsRecord, MemoryCache};
use parking_lot::Mutex;
use std::time::Duration;

/// One `set` call as seen by the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheWrite {
    pub key: String,
    pub records: Vec<DnsRecord>,
    pub ttl: Duration,
}

/// [`MemoryCache`] that keeps a log of writes and counts reads.
#[derive(Default)]
pub struct RecordingCache {
    inner: MemoryCache,
    writes: Mutex<Vec<CacheWrite>>,
    reads: Mutex<usize>,
}

#[allow(dead_code)]
impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<CacheWrite> {
        self.writes.lock().clone()
    }

    pub fn reads(&self) -> usize {
        *self.reads.lock()
    }
}

impl CacheStore for RecordingCache {
    fn get(&self, key: &str) -> Option<Vec<DnsRecord>> {
        *self.reads.lock() += 1;
        self.inner.get(key)
    }

    fn set(&self, key: &str, records: Vec<DnsRecord>, ttl: Duration) {
        self.writes.lock().push(CacheWrite {
            key: key.to_string(),
            records: records.clone(),
            ttl,
        });
        self.inner.set(key, records, ttl);
    }
}
