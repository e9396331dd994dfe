//! Normalized DNS resource records.
//!
//! Whatever the transport speaks on the wire, blacklist answers are reduced
//! to this shape before they are cached or handed to callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Record types a blacklist lookup asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// Return code, conventionally inside 127.0.0.0/8.
    A,
    /// Human-readable listing reason.
    Txt,
}

impl RecordKind {
    /// Both types queried for every blacklist lookup, in query order.
    pub const LOOKUP: [RecordKind; 2] = [RecordKind::A, RecordKind::Txt];

    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-specific payload of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecordData {
    #[serde(rename = "A")]
    A { ip: Ipv4Addr },
    #[serde(rename = "TXT")]
    Txt { txt: String },
}

/// One resource record returned for a blacklist query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Owner name, without the trailing root dot.
    pub host: String,
    /// Record class, `IN` in practice.
    pub class: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
    #[serde(flatten)]
    pub data: RecordData,
}

impl DnsRecord {
    /// Build an `A` record in class `IN`.
    pub fn a(host: impl Into<String>, ip: Ipv4Addr, ttl: u32) -> Self {
        Self {
            host: host.into(),
            class: "IN".to_string(),
            ttl,
            data: RecordData::A { ip },
        }
    }

    /// Build a `TXT` record in class `IN`.
    pub fn txt(host: impl Into<String>, txt: impl Into<String>, ttl: u32) -> Self {
        Self {
            host: host.into(),
            class: "IN".to_string(),
            ttl,
            data: RecordData::Txt { txt: txt.into() },
        }
    }

    pub fn record_type(&self) -> RecordKind {
        match self.data {
            RecordData::A { .. } => RecordKind::A,
            RecordData::Txt { .. } => RecordKind::Txt,
        }
    }

    /// The return code, for `A` records.
    pub fn ip(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A { ip } => Some(ip),
            RecordData::Txt { .. } => None,
        }
    }

    /// The text payload, for `TXT` records.
    pub fn txt_data(&self) -> Option<&str> {
        match &self.data {
            RecordData::Txt { txt } => Some(txt),
            RecordData::A { .. } => None,
        }
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            RecordData::A { ip } => {
                write!(f, "{} {} {} A {}", self.host, self.ttl, self.class, ip)
            }
            RecordData::Txt { txt } => {
                write!(f, "{} {} {} TXT \"{}\"", self.host, self.ttl, self.class, txt)
            }
        }
    }
}
