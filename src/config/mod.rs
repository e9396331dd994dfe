//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: The root [`Config`] document and its loading/validation
//! - [`lists`]: Blacklist sets by category ([`ListSet`])
//! - [`resolver`]: DNS resolver tuning ([`ResolverSettings`])
//! - [`cache`]: Cache backend selection ([`CacheConfig`])

mod cache;
mod lists;
mod resolver;
mod types;

pub use cache::{CacheBackend, CacheConfig};
pub use lists::{ListCategory, ListSet};
pub use resolver::ResolverSettings;
pub use types::{Config, ConfigError};
