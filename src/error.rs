//! Unified error handling for dnsrbl.
//!
//! None of these errors reach callers of the reputation API: lookups degrade
//! to "not listed" and cache failures degrade to a miss. They exist so the
//! failure is logged with a precise cause before it is swallowed.

use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Transport Errors (DNS queries)
// ============================================================================

/// Errors produced by a [`DnsTransport`](crate::transport::DnsTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("query timed out after {0:?}")]
    Timeout(Duration),

    #[error("resolver error: {0}")]
    Resolve(#[from] hickory_resolver::ResolveError),

    #[error("transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "timeout",
            Self::Resolve(_) => "resolve_error",
            Self::Other(_) => "other",
        }
    }
}

// ============================================================================
// Cache Errors (persistent stores)
// ============================================================================

/// Errors raised inside cache stores that touch the filesystem.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache entry is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
}

// ============================================================================
// Query Name Errors
// ============================================================================

/// Reasons a lookup name cannot be synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryNameError {
    #[error("IPv6 reverse lookups are not supported")]
    Ipv6Unsupported,

    #[error("address is not a valid IP literal or hostname")]
    InvalidAddress,
}
