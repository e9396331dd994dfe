//! DNS-based reputation checks for IP addresses and hostnames.
//!
//! IP addresses are looked up on DNSBLs (reversed octets under the list
//! zone), hostnames on SURBLs (hostname under the list zone). An answer with
//! any `A` or `TXT` record means "listed".
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 DnsrblService                 │
//! │   classify ─▶ pick dnsbl/surbl ─▶ per list    │
//! ├───────────────────────────────────────────────┤
//! │                 LookupEngine                  │
//! │ ┌────────────┐  ┌────────────┐  ┌───────────┐ │
//! │ │ CacheStore │  │ query_name │  │ Transport │ │
//! │ │ (TTL'd)    │  │ (reverse)  │  │ (A + TXT) │ │
//! │ └────────────┘  └────────────┘  └───────────┘ │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [blacklists]
//! dnsbl = ["sbl-xbl.spamhaus.org", "bl.spamcop.net"]
//! surbl = ["dbl.spamhaus.org"]
//!
//! [resolver]
//! timeout_ms = 500
//! attempts = 1
//!
//! [cache]
//! backend = "memory"
//! ```

pub mod address;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod query_name;
pub mod record;
pub mod service;
pub mod transport;

pub use address::{Classification, classify};
pub use cache::{CacheStore, FileCache, MemoryCache};
pub use config::{Config, ListSet};
pub use lookup::{LookupEngine, NEGATIVE_TTL};
pub use record::{DnsRecord, RecordData, RecordKind};
pub use service::{DnsrblService, ListingResult};
pub use transport::{DnsTransport, HickoryTransport};
