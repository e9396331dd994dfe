//! Directory-backed cache store.
//!
//! One JSON document per key, named by the SHA-256 of the key. Entries
//! outlive the process, so several short-lived checkers (cron jobs, MTA
//! hooks) can share answers.

use super::CacheStore;
use crate::error::CacheError;
use crate::record::DnsRecord;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, DirEntry};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

const TEMP_PREFIX: &str = ".pending-";
const TEMP_SUFFIX: &str = ".tmp";

/// Temp files older than this belong to a writer that died mid-write.
const ORPHAN_AGE: Duration = Duration::from_secs(60);

/// On-disk layout of one entry.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    key: String,
    /// Unix time in milliseconds after which the entry is stale.
    expires_at_ms: u64,
    records: Vec<DnsRecord>,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Persistent cache keeping one file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Open (and create if needed) a cache directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "File cache opened");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.dir.join(format!("{:x}.json", digest))
    }

    fn read(&self, key: &str) -> Result<Option<Vec<DnsRecord>>, CacheError> {
        let path = self.path_for(key);
        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entry: StoredEntry = serde_json::from_slice(&content)?;
        if entry.key != key || entry.expires_at_ms <= now_ms() {
            return Ok(None);
        }
        Ok(Some(entry.records))
    }

    fn write(&self, key: &str, records: Vec<DnsRecord>, ttl: Duration) -> Result<(), CacheError> {
        let entry = StoredEntry {
            key: key.to_string(),
            expires_at_ms: now_ms().saturating_add(ttl.as_millis() as u64),
            records,
        };

        // Each writer gets its own temp file; the rename is the commit point.
        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(&self.dir)?;
        tmp.write_all(&serde_json::to_vec(&entry)?)?;
        tmp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }

    /// Delete every expired or unreadable entry file, plus temp files left
    /// behind by writers that never finished.
    ///
    /// Files removed concurrently by another process are skipped.
    pub fn purge_expired(&self) -> Result<usize, CacheError> {
        let now = now_ms();
        let mut removed = 0;

        for dir_entry in fs::read_dir(&self.dir)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();

            let stale = match path.extension().and_then(|e| e.to_str()) {
                Some("json") => entry_is_stale(&path, now),
                Some("tmp") => is_orphan(&dir_entry),
                _ => false,
            };

            if stale && remove_if_present(&path)? {
                removed += 1;
            }
        }

        Ok(removed)
    }
}

fn entry_is_stale(path: &Path, now: u64) -> bool {
    match fs::read(path) {
        Ok(content) => serde_json::from_slice::<StoredEntry>(&content)
            .map(|e| e.expires_at_ms <= now)
            .unwrap_or(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(_) => true,
    }
}

fn is_orphan(dir_entry: &DirEntry) -> bool {
    dir_entry
        .metadata()
        .and_then(|m| m.modified())
        .map(|modified| modified.elapsed().unwrap_or_default() >= ORPHAN_AGE)
        .unwrap_or(false)
}

/// Remove `path`; `Ok(false)` if it was already gone.
fn remove_if_present(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

impl CacheStore for FileCache {
    fn get(&self, key: &str) -> Option<Vec<DnsRecord>> {
        match self.read(key) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = %key, error = %e, "File cache read failed");
                None
            }
        }
    }

    fn set(&self, key: &str, records: Vec<DnsRecord>, ttl: Duration) {
        if let Err(e) = self.write(key, records, ttl) {
            warn!(key = %key, error = %e, "File cache write failed");
        }
    }
}
