//! DNS resolver tuning.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

/// Resolver settings for blacklist queries.
///
/// Defaults favour a quick "not listed" over waiting on a slow list: one
/// attempt with a sub-second timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Per-attempt query timeout in milliseconds (default: 500).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Attempts per query (default: 1).
    #[serde(default = "default_attempts")]
    pub attempts: usize,
    /// Nameservers to query instead of the system resolver configuration.
    #[serde(default)]
    pub nameservers: Vec<IpAddr>,
    /// Port for `nameservers` (default: 53).
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            attempts: default_attempts(),
            nameservers: Vec::new(),
            port: default_port(),
        }
    }
}

impl ResolverSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Upper bound on one lookup, covering every attempt.
    pub fn deadline(&self) -> Duration {
        self.timeout() * self.attempts.max(1) as u32
    }
}

fn default_timeout_ms() -> u64 {
    500
}

fn default_attempts() -> usize {
    1
}

fn default_port() -> u16 {
    53
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_short() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.timeout(), Duration::from_millis(500));
        assert_eq!(settings.attempts, 1);
        assert_eq!(settings.port, 53);
        assert!(settings.nameservers.is_empty());
    }

    #[test]
    fn deadline_covers_all_attempts() {
        let settings = ResolverSettings {
            timeout_ms: 300,
            attempts: 2,
            ..Default::default()
        };
        assert_eq!(settings.deadline(), Duration::from_millis(600));
    }

    #[test]
    fn parse_partial_section() {
        let settings: ResolverSettings =
            toml::from_str("timeout_ms = 250\nnameservers = [\"9.9.9.9\"]").unwrap();
        assert_eq!(settings.timeout_ms, 250);
        assert_eq!(settings.attempts, 1);
        assert_eq!(settings.nameservers, vec!["9.9.9.9".parse::<IpAddr>().unwrap()]);
    }
}
