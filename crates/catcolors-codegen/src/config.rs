//! Render configuration.
//!
//! Every field has a default matching what existing sites already store and
//! style against, so an empty config file is a valid config.

use catcolors_model::{keys::DEFAULT_NAMESPACE, Color, OptionKeys, Slug, JOB_CATEGORY_TAXONOMY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Error reading config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prefix of every option key.
    pub namespace: String,
    /// Base class of the category badge; rules select `.<prefix>.<slug>`.
    pub selector_prefix: String,
    /// Color emitted for categories without an assignment.
    pub default_color: Color,
    /// `id` of the emitted `<style>` element.
    pub style_id: String,
    /// Taxonomy the terms are read from.
    pub taxonomy: String,
    pub section_id: String,
    pub section_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.into(),
            selector_prefix: "job-category".into(),
            default_color: Color::white(),
            style_id: "job_manager_cat_colors".into(),
            taxonomy: JOB_CATEGORY_TAXONOMY.into(),
            section_id: "job_cat_colors".into(),
            section_label: "Job Category Colors".into(),
        }
    }
}

impl Config {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fields that end up inside CSS or option keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Slug::parse(&self.selector_prefix).map_err(|e| ConfigError::Invalid {
            field: "selector_prefix",
            message: e.to_string(),
        })?;
        Slug::parse(&self.namespace).map_err(|e| ConfigError::Invalid {
            field: "namespace",
            message: e.to_string(),
        })?;
        if self.style_id.is_empty() || self.style_id.contains(['\'', '"', '<', '>', ' ']) {
            return Err(ConfigError::Invalid {
                field: "style_id",
                message: format!("{:?} is not a usable element id", self.style_id),
            });
        }
        Ok(())
    }

    pub fn keys(&self) -> OptionKeys {
        OptionKeys::new(self.namespace.clone())
    }
}
