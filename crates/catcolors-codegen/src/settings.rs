//! Settings contribution.
//!
//! The host aggregates every plugin's settings into sections; this crate
//! contributes one section holding the color schema.

use crate::schema::FieldDescriptor;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSection {
    pub id: String,
    pub label: String,
    pub fields: Vec<FieldDescriptor>,
}

/// Aggregation point the host renders and persists settings from.
pub trait SettingsRegistry {
    /// Add a section, replacing any earlier section with the same id.
    fn add_section(&mut self, section: SettingsSection);
}

/// Ordered in-memory registry.
#[derive(Debug, Clone, Default)]
pub struct SettingsPage {
    sections: Vec<SettingsSection>,
}

impl SettingsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[SettingsSection] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&SettingsSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

impl SettingsRegistry for SettingsPage {
    fn add_section(&mut self, section: SettingsSection) {
        match self.sections.iter_mut().find(|s| s.id == section.id) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }
}
