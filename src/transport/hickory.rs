//! Hickory-backed transport.

use super::DnsTransport;
use crate::config::ResolverSettings;
use crate::error::TransportError;
use crate::record::{DnsRecord, RecordData, RecordKind};
use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::rr::{RData, Record, RecordType};
use std::time::Duration;
use tracing::{debug, info, warn};

/// [`DnsTransport`] over a tokio Hickory resolver tuned for blacklist checks.
///
/// Blacklist answers are only useful when they are fast, so the resolver is
/// built with the short timeout and single attempt from [`ResolverSettings`]
/// rather than the system defaults.
#[derive(Clone)]
pub struct HickoryTransport {
    resolver: TokioResolver,
    deadline: Duration,
}

impl HickoryTransport {
    pub fn new(settings: &ResolverSettings) -> Self {
        let mut builder = if settings.nameservers.is_empty() {
            // Try system config, fall back to defaults
            TokioResolver::builder_tokio().unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read system resolver config, using defaults");
                TokioResolver::builder_with_config(
                    ResolverConfig::default(),
                    TokioConnectionProvider::default(),
                )
            })
        } else {
            let group =
                NameServerConfigGroup::from_ips_clear(&settings.nameservers, settings.port, true);
            TokioResolver::builder_with_config(
                ResolverConfig::from_parts(None, vec![], group),
                TokioConnectionProvider::default(),
            )
        };

        let opts = builder.options_mut();
        opts.timeout = settings.timeout();
        opts.attempts = settings.attempts;

        info!(
            timeout_ms = settings.timeout_ms,
            attempts = settings.attempts,
            nameservers = settings.nameservers.len(),
            "DNS transport initialized"
        );

        Self {
            resolver: builder.build(),
            deadline: settings.deadline(),
        }
    }

    async fn query_one(&self, name: &str, kind: RecordKind) -> Result<Vec<DnsRecord>, TransportError> {
        let record_type = match kind {
            RecordKind::A => RecordType::A,
            RecordKind::Txt => RecordType::TXT,
        };

        let lookup = self.resolver.lookup(name, record_type);
        match tokio::time::timeout(self.deadline, lookup).await {
            Ok(Ok(response)) => Ok(response.record_iter().filter_map(normalize).collect()),
            Ok(Err(e)) if e.is_no_records_found() => {
                debug!(query = %name, record_type = %kind, "No records");
                Ok(Vec::new())
            }
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(TransportError::Timeout(self.deadline)),
        }
    }
}

#[async_trait]
impl DnsTransport for HickoryTransport {
    async fn query(
        &self,
        name: &str,
        kinds: &[RecordKind],
    ) -> Result<Vec<DnsRecord>, TransportError> {
        merge_answers(name, kinds, |kind| self.query_one(name, kind)).await
    }
}

/// Run one query per kind, in order, and concatenate the answers.
///
/// An error before any record has arrived fails the whole query. A later
/// error keeps the records already gathered.
async fn merge_answers<F, Fut>(
    name: &str,
    kinds: &[RecordKind],
    mut query_one: F,
) -> Result<Vec<DnsRecord>, TransportError>
where
    F: FnMut(RecordKind) -> Fut,
    Fut: Future<Output = Result<Vec<DnsRecord>, TransportError>>,
{
    let mut records = Vec::new();

    for kind in kinds {
        match query_one(*kind).await {
            Ok(mut found) => records.append(&mut found),
            Err(e) if records.is_empty() => return Err(e),
            Err(e) => {
                warn!(
                    query = %name,
                    record_type = %kind,
                    error = %e,
                    "Partial DNS answer, keeping records already received"
                );
            }
        }
    }

    Ok(records)
}

/// Reduce a Hickory record to a [`DnsRecord`]; other types (CNAME chains) are skipped.
fn normalize(record: &Record) -> Option<DnsRecord> {
    let data = match record.data() {
        RData::A(a) => RecordData::A { ip: a.0 },
        RData::TXT(txt) => RecordData::Txt {
            txt: txt
                .txt_data()
                .iter()
                .map(|chunk| String::from_utf8_lossy(chunk))
                .collect(),
        },
        _ => return None,
    };

    Some(DnsRecord {
        host: record.name().to_string().trim_end_matches('.').to_string(),
        class: record.dns_class().to_string(),
        ttl: record.ttl(),
        data,
    })
}
