//! Reputation evaluation across configured blacklists.
//!
//! IP literals are checked against the `dnsbl` lists and hostnames against
//! the `surbl` lists, one list at a time in configured order.

use crate::address::{Classification, classify};
use crate::cache::{CacheStore, FileCache, MemoryCache};
use crate::config::{CacheBackend, Config, ListCategory, ListSet};
use crate::lookup::LookupEngine;
use crate::record::DnsRecord;
use crate::transport::{DnsTransport, HickoryTransport};
use parking_lot::RwLock;
use serde::Serialize;
use serde::ser::SerializeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Per-list records for one address, in configured list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingResult {
    entries: Vec<(String, Vec<DnsRecord>)>,
}

impl ListingResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer of `list`. A list seen before keeps its position.
    pub fn insert(&mut self, list: impl Into<String>, records: Vec<DnsRecord>) {
        let list = list.into();
        match self.entries.iter_mut().find(|(name, _)| *name == list) {
            Some((_, existing)) => *existing = records,
            None => self.entries.push((list, records)),
        }
    }

    pub fn get(&self, list: &str) -> Option<&[DnsRecord]> {
        self.entries
            .iter()
            .find(|(name, _)| name == list)
            .map(|(_, records)| records.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DnsRecord])> {
        self.entries
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Lists that returned at least one record, in order.
    pub fn listing(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn is_listed(&self) -> bool {
        self.iter().any(|(_, records)| !records.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ListingResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (list, records) in &self.entries {
            map.serialize_entry(list, records)?;
        }
        map.end()
    }
}

/// DNSBL/SURBL checker.
///
/// Cheap to share behind an `Arc`; the list set can be swapped at any time
/// and takes effect for the next call.
pub struct DnsrblService {
    blacklists: RwLock<ListSet>,
    engine: LookupEngine,
}

impl DnsrblService {
    /// Create a service over `transport`. Without a `cache`, an in-memory
    /// one is used for the lifetime of the service.
    pub fn new(
        blacklists: ListSet,
        cache: Option<Arc<dyn CacheStore>>,
        transport: Arc<dyn DnsTransport>,
    ) -> Self {
        let cache = cache.unwrap_or_else(|| Arc::new(MemoryCache::new()));

        info!(
            dnsbl = blacklists.dnsbl.len(),
            surbl = blacklists.surbl.len(),
            "DNSRBL service initialized"
        );

        Self {
            blacklists: RwLock::new(blacklists),
            engine: LookupEngine::new(transport, cache),
        }
    }

    /// Wire a Hickory transport and the configured cache backend.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let transport = Arc::new(HickoryTransport::new(&config.resolver));

        let cache: Arc<dyn CacheStore> = match config.cache.backend {
            CacheBackend::Memory => Arc::new(MemoryCache::new()),
            CacheBackend::File => {
                let path = config
                    .cache
                    .path
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("cache.path is required for the file backend"))?;
                Arc::new(FileCache::open(path)?)
            }
        };

        Ok(Self::new(config.blacklists.clone(), Some(cache), transport))
    }

    /// Replace the list set from an untyped mapping.
    ///
    /// Returns `false` and keeps the current lists if `value` is not a
    /// mapping of categories to string arrays. Missing categories become
    /// empty.
    pub fn set_blacklists(&self, value: &toml::Value) -> bool {
        match ListSet::from_value(value) {
            Some(lists) => {
                self.replace_blacklists(lists);
                true
            }
            None => {
                debug!("Ignoring blacklist update that is not a mapping");
                false
            }
        }
    }

    /// Replace the list set.
    pub fn replace_blacklists(&self, lists: ListSet) {
        *self.blacklists.write() = lists;
    }

    /// Snapshot of the current list set.
    pub fn get_blacklists(&self) -> ListSet {
        self.blacklists.read().clone()
    }

    fn lists_for(&self, classification: Classification) -> Vec<String> {
        let category = match classification {
            Classification::IpLiteral(_) => ListCategory::Dnsbl,
            Classification::Hostname => ListCategory::Surbl,
            Classification::Invalid => return Vec::new(),
        };
        self.blacklists.read().category(category).to_vec()
    }

    /// Records from every applicable list, keyed by list in configured order.
    ///
    /// IP literals are checked against `dnsbl`, everything else against
    /// `surbl`. An empty applicable set yields an empty result.
    pub async fn get_all(&self, address: &str) -> ListingResult {
        let classification = classify(address);
        let mut result = ListingResult::new();
        for list in self.lists_for(classification) {
            let records = self.engine.lookup(address, classification, &list).await;
            result.insert(list, records);
        }
        result
    }

    /// [`get_all`](Self::get_all) for an untyped value.
    ///
    /// Non-strings are `None`, which callers can tell apart from a clean
    /// address with an empty result.
    pub async fn get_all_value(&self, address: &toml::Value) -> Option<ListingResult> {
        match address.as_str() {
            Some(s) => Some(self.get_all(s).await),
            None => None,
        }
    }

    /// Names of the lists that list `address`, in configured order.
    pub async fn get_listing_blacklists(&self, address: &str) -> Vec<String> {
        self.get_all(address).await.listing()
    }

    /// Whether any applicable list has records for `address`.
    ///
    /// Stops at the first list that does.
    pub async fn is_listed(&self, address: &str) -> bool {
        let classification = classify(address);
        for list in self.lists_for(classification) {
            if !self.engine.lookup(address, classification, &list).await.is_empty() {
                debug!(address = %address, list = %list, "Address is listed");
                return true;
            }
        }
        false
    }

    /// [`is_listed`](Self::is_listed) for an untyped value; non-strings are never listed.
    pub async fn is_listed_value(&self, address: &toml::Value) -> bool {
        match address.as_str() {
            Some(s) => self.is_listed(s).await,
            None => false,
        }
    }
}
