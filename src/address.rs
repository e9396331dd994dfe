//! Address classification.
//!
//! Decides whether an input is an IP literal (checked against DNSBLs) or a
//! hostname (checked against SURBLs).

use std::net::IpAddr;

/// Outcome of classifying a host input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A literal IPv4 or IPv6 address.
    IpLiteral(IpAddr),
    /// Any other string, checked as a name prefix.
    Hostname,
    /// Not a string at all.
    Invalid,
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Classification::Invalid)
    }
}

/// Classify a host string.
///
/// IP detection follows general IP syntax, so every textual IPv6 form is an
/// IP literal too. Every other string is a [`Classification::Hostname`], even
/// one no resolver will accept; such names end up as a failed, negatively
/// cached lookup.
pub fn classify(input: &str) -> Classification {
    match input.parse::<IpAddr>() {
        Ok(ip) => Classification::IpLiteral(ip),
        Err(_) => Classification::Hostname,
    }
}

/// Classify an untyped value, e.g. one read from a config document.
///
/// Only strings can be addresses; booleans, numbers, arrays and tables are
/// always [`Classification::Invalid`].
pub fn classify_value(input: &toml::Value) -> Classification {
    match input.as_str() {
        Some(s) => classify(s),
        None => Classification::Invalid,
    }
}
