//! Core configuration types and loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::cache::{CacheBackend, CacheConfig};
use super::lists::ListSet;
use super::resolver::ResolverSettings;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Checker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Blacklists to query, by category.
    #[serde(default)]
    pub blacklists: ListSet,
    /// Resolver tuning for blacklist queries.
    #[serde(default)]
    pub resolver: ResolverSettings,
    /// Lookup cache backend.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every lookup fail or go nowhere.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "resolver.timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.resolver.attempts == 0 {
            return Err(ConfigError::Invalid(
                "resolver.attempts must be at least 1".to_string(),
            ));
        }

        if self.cache.backend == CacheBackend::File && self.cache.path.is_none() {
            return Err(ConfigError::Invalid(
                "cache.path is required when cache.backend = \"file\"".to_string(),
            ));
        }

        for list in self.blacklists.dnsbl.iter().chain(&self.blacklists.surbl) {
            if list.trim().is_empty() {
                return Err(ConfigError::Invalid("blacklist names must not be empty".to_string()));
            }
        }

        Ok(())
    }

    /// Example configuration document.
    pub fn example() -> String {
        r#"# dnsrbl configuration

# Lists are queried in the order given.
[blacklists]
dnsbl = ["sbl-xbl.spamhaus.org", "bl.spamcop.net"]   # checked for IP addresses
surbl = ["dbl.spamhaus.org"]                          # checked for hostnames

[resolver]
timeout_ms = 500        # per-attempt timeout
attempts = 1
# nameservers = ["127.0.0.1"]   # default: system resolver configuration
# port = 53

[cache]
backend = "memory"      # memory or file
# path = "/var/cache/dnsrbl"    # required for backend = "file"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn example_parses_and_validates() {
        let config: Config = toml::from_str(&Config::example()).unwrap();
        config.validate().unwrap();
        assert_eq!(
            config.blacklists.dnsbl,
            vec!["sbl-xbl.spamhaus.org", "bl.spamcop.net"]
        );
        assert_eq!(config.blacklists.surbl, vec!["dbl.spamhaus.org"]);
        assert_eq!(config.cache.backend, CacheBackend::Memory);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        config.validate().unwrap();
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config: Config = toml::from_str("[resolver]\ntimeout_ms = 0").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_attempts_is_invalid() {
        let config: Config = toml::from_str("[resolver]\nattempts = 0").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn file_backend_requires_path() {
        let config: Config = toml::from_str("[cache]\nbackend = \"file\"").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn empty_list_name_is_invalid() {
        let config: Config = toml::from_str("[blacklists]\ndnsbl = [\" \"]").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[blacklists]\nsurbl = [\"dbl.spamhaus.org\"]").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.blacklists.dnsbl.is_empty());
        assert_eq!(config.blacklists.surbl, vec!["dbl.spamhaus.org"]);
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/dnsrbl.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[blacklists\n").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse(_))));
    }
}
