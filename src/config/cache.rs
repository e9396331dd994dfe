//! Cache backend selection.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which [`CacheStore`](crate::cache::CacheStore) backs lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-process map, lost on exit.
    #[default]
    Memory,
    /// JSON files under `path`, shared across runs.
    File,
}

/// Cache configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,
    /// Directory for the file backend.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
