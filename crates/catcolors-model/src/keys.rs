//! Option-key naming.
//!
//! The option store persists assignments by key, so this scheme is a storage
//! format: existing sites keep their colors only while these keys stay
//! byte-identical.

use crate::Slug;

/// Namespace used by sites that already store category colors.
pub const DEFAULT_NAMESPACE: &str = "job_manager_job_cat";

/// Derives every option key the color settings read or write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionKeys {
    namespace: String,
}

impl OptionKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `<namespace>_<slug>_color`
    pub fn color_key(&self, slug: &Slug) -> String {
        format!("{}_{}_color", self.namespace, slug)
    }

    /// Key of the background/text select.
    pub fn mode_key(&self) -> String {
        format!("{}_what_color", self.namespace)
    }

    /// Key of the hidden usage-instructions field.
    pub fn usage_key(&self) -> String {
        format!("{}_usage_color", self.namespace)
    }

    /// Whether a term's color key would shadow one of the fixed keys.
    pub fn collides_with_fixed_key(&self, slug: &Slug) -> bool {
        let key = self.color_key(slug);
        key == self.mode_key() || key == self.usage_key()
    }
}

impl Default for OptionKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
