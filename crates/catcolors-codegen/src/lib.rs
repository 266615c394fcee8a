//! Job Category Colors code generator
//!
//! Turns the category list and the stored color options into two outputs:
//! the settings schema the host renders for administrators, and the
//! stylesheet injected into public pages.
//!
//! ```text
//! terms ─┬─ schema::build  → SettingsSection { fields }
//!        └─ css::render    → <style id='job_manager_cat_colors'>…</style>
//! ```

pub mod config;
pub mod css;
pub mod html;
pub mod schema;
pub mod settings;

pub use config::{Config, ConfigError};
pub use css::{render_css, render_css_for_mode, StyleRenderer};
pub use schema::{build_schema, Choice, FieldDescriptor, FieldKind, SchemaBuilder};
pub use settings::{SettingsPage, SettingsRegistry, SettingsSection};

use catcolors_model::{DisplayMode, ModelError, OptionStore, Term, TermProvider};
use tracing::debug;

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodegenError {
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// The category colors feature, wired to a configuration.
///
/// The host owns one of these and calls its handlers from the settings
/// screen and the page-head render.
#[derive(Debug, Clone, Default)]
pub struct CategoryColors {
    config: Config,
}

impl CategoryColors {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All category terms, including ones no listing uses yet.
    pub fn terms(&self, provider: &impl TermProvider) -> Vec<Term> {
        provider.terms(&self.config.taxonomy, true)
    }

    /// The settings section for the current categories.
    pub fn settings_section(&self, provider: &impl TermProvider) -> SettingsSection {
        let terms = self.terms(provider);
        SettingsSection {
            id: self.config.section_id.clone(),
            label: self.config.section_label.clone(),
            fields: SchemaBuilder::new(&self.config).build(&terms),
        }
    }

    pub fn register_settings(
        &self,
        registry: &mut impl SettingsRegistry,
        provider: &impl TermProvider,
    ) {
        registry.add_section(self.settings_section(provider));
    }

    /// The stored display mode. Unset falls back to the schema default; an
    /// unrecognized value is an error.
    pub fn stored_mode(&self, store: &impl OptionStore) -> Result<DisplayMode, CodegenError> {
        match store.get(&self.config.keys().mode_key()) {
            Some(value) if !value.trim().is_empty() => Ok(value.parse()?),
            _ => Ok(DisplayMode::default()),
        }
    }

    /// The stylesheet for the stored options, in the given mode.
    pub fn stylesheet_with_mode(
        &self,
        provider: &impl TermProvider,
        store: &impl OptionStore,
        mode: DisplayMode,
    ) -> String {
        let terms = self.terms(provider);
        let keys = self.config.keys();
        StyleRenderer::new(&self.config).render(&terms, mode, |slug| {
            store.get(&keys.color_key(slug))
        })
    }

    /// The stylesheet for the stored options and stored mode.
    pub fn stylesheet(
        &self,
        provider: &impl TermProvider,
        store: &impl OptionStore,
    ) -> Result<String, CodegenError> {
        let mode = self.stored_mode(store)?;
        Ok(self.stylesheet_with_mode(provider, store, mode))
    }

    /// The `<style>` element for the page head.
    pub fn page_head(
        &self,
        provider: &impl TermProvider,
        store: &impl OptionStore,
    ) -> Result<String, CodegenError> {
        let css = self.stylesheet(provider, store)?;
        debug!(style_id = %self.config.style_id, "rendered page head styles");
        Ok(html::style_tag(&self.config.style_id, &css))
    }

    /// Badge markup for a listing with the given assigned categories.
    pub fn badge(&self, assigned: &[Term]) -> String {
        html::category_badge(&self.config.selector_prefix, html::primary_category(assigned))
    }
}
