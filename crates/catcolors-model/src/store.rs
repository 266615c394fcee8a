//! Host collaborators: where terms and stored options come from.
//!
//! The host platform owns both; these traits are the only way the generators
//! see them. The in-memory implementations back the CLI and the tests.

use crate::{Slug, Term};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Supplies the terms of a taxonomy, in the host's order.
pub trait TermProvider {
    fn terms(&self, taxonomy: &str, include_unused: bool) -> Vec<Term>;
}

/// Named string values persisted by the host.
///
/// The generators only read; `set` exists for the host's settings handler.
pub trait OptionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// A term together with how many listings use it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TermRecord {
    pub slug: Slug,
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

impl TermRecord {
    pub fn term(&self) -> Term {
        Term {
            slug: self.slug.clone(),
            name: self.name.clone(),
        }
    }
}

/// Fixed per-taxonomy term lists.
#[derive(Debug, Clone, Default)]
pub struct StaticTermProvider {
    taxonomies: BTreeMap<String, Vec<TermRecord>>,
}

impl StaticTermProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider serving `records` for a single taxonomy.
    pub fn with_terms(taxonomy: &str, records: Vec<TermRecord>) -> Self {
        let mut provider = Self::new();
        provider.taxonomies.insert(taxonomy.to_string(), records);
        provider
    }

    pub fn push(&mut self, taxonomy: &str, record: TermRecord) {
        self.taxonomies
            .entry(taxonomy.to_string())
            .or_default()
            .push(record);
    }
}

impl TermProvider for StaticTermProvider {
    fn terms(&self, taxonomy: &str, include_unused: bool) -> Vec<Term> {
        self.taxonomies
            .get(taxonomy)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| include_unused || r.count > 0)
                    .map(TermRecord::term)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Option store held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MemoryOptionStore {
    values: BTreeMap<String, String>,
}

impl MemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl OptionStore for MemoryOptionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryOptionStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
