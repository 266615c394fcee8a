//! Site snapshot files: the category terms and stored options of one site.

use anyhow::{Context, Result};
use catcolors_model::{MemoryOptionStore, StaticTermProvider, TermRecord};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Site {
    pub terms: Vec<TermRecord>,
    pub options: MemoryOptionStore,
}

impl Site {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("file not found: {}", path.display());
        }
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Serve the site's terms under `taxonomy`.
    pub fn provider(&self, taxonomy: &str) -> StaticTermProvider {
        StaticTermProvider::with_terms(taxonomy, self.terms.clone())
    }
}
