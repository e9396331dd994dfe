//! Scripted DNS transport.

#![allow(dead_code)]

use async_trait::async_trait;
use dnsrbl::error::TransportError;
use dnsrbl::{DnsRecord, DnsTransport, RecordKind};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::time::Duration;

enum Answer {
    Records(Vec<DnsRecord>),
    Timeout,
}

/// Transport answering from a fixed table of query names.
///
/// Unknown names get an empty answer (NXDOMAIN). Every query is recorded so
/// tests can assert how many round-trips a call cost.
#[derive(Default)]
pub struct MockTransport {
    answers: Mutex<HashMap<String, Answer>>,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional test entry: `127.0.0.2` is listed on every DNSBL in
    /// `dnsbl` and `dbltest.com` on every SURBL in `surbl`.
    pub fn with_test_entries(dnsbl: &[&str], surbl: &[&str]) -> Self {
        let transport = Self::new();
        for list in dnsbl {
            transport.listed(&format!("2.0.0.127.{list}."), Ipv4Addr::new(127, 0, 0, 2), 300);
        }
        for list in surbl {
            transport.listed(&format!("dbltest.com.{list}."), Ipv4Addr::new(127, 0, 1, 2), 300);
        }
        transport
    }

    /// Answer `name` with an `A` record and a `TXT` reason.
    pub fn listed(&self, name: &str, code: Ipv4Addr, ttl: u32) {
        let host = name.trim_end_matches('.');
        self.answer(
            name,
            vec![
                DnsRecord::a(host, code, ttl),
                DnsRecord::txt(host, format!("listed: {host}"), ttl),
            ],
        );
    }

    pub fn answer(&self, name: &str, records: Vec<DnsRecord>) {
        self.answers
            .lock()
            .insert(name.to_string(), Answer::Records(records));
    }

    /// Make queries for `name` time out.
    pub fn timeout(&self, name: &str) {
        self.answers.lock().insert(name.to_string(), Answer::Timeout);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().len()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn query(
        &self,
        name: &str,
        kinds: &[RecordKind],
    ) -> Result<Vec<DnsRecord>, TransportError> {
        self.queries.lock().push(name.to_string());

        match self.answers.lock().get(name) {
            Some(Answer::Records(records)) => Ok(records
                .iter()
                .filter(|r| kinds.contains(&r.record_type()))
                .cloned()
                .collect()),
            Some(Answer::Timeout) => Err(TransportError::Timeout(Duration::from_millis(500))),
            None => Ok(Vec::new()),
        }
    }
}
