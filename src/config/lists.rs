//! Blacklist set configuration.

use serde::{Deserialize, Serialize};

/// Which kind of list an address is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListCategory {
    /// IP-keyed lists (reversed-octet lookup).
    Dnsbl,
    /// Domain-keyed lists (direct lookup).
    Surbl,
}

impl ListCategory {
    pub fn key(&self) -> &'static str {
        match self {
            ListCategory::Dnsbl => "dnsbl",
            ListCategory::Surbl => "surbl",
        }
    }
}

/// Configured blacklists, by category, in query order.
///
/// Both categories always exist; a category left out of a config document
/// is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSet {
    /// IP blacklists, e.g. `sbl.spamhaus.org`.
    #[serde(default)]
    pub dnsbl: Vec<String>,
    /// Domain blacklists, e.g. `dbl.spamhaus.org`.
    #[serde(default)]
    pub surbl: Vec<String>,
}

impl ListSet {
    pub fn new(dnsbl: Vec<String>, surbl: Vec<String>) -> Self {
        Self { dnsbl, surbl }
    }

    /// Build a list set from an untyped mapping.
    ///
    /// Returns `None` if `value` is not a table, or if a present category is
    /// not an array of strings. Unknown keys are ignored.
    pub fn from_value(value: &toml::Value) -> Option<Self> {
        let table = value.as_table()?;
        let category = |key: &str| -> Option<Vec<String>> {
            match table.get(key) {
                None => Some(Vec::new()),
                Some(v) => v
                    .as_array()?
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect(),
            }
        };

        Some(Self {
            dnsbl: category(ListCategory::Dnsbl.key())?,
            surbl: category(ListCategory::Surbl.key())?,
        })
    }

    /// Lists of one category.
    pub fn category(&self, category: ListCategory) -> &[String] {
        match category {
            ListCategory::Dnsbl => &self.dnsbl,
            ListCategory::Surbl => &self.surbl,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dnsbl.is_empty() && self.surbl.is_empty()
    }
}
