//! Which CSS property the assigned colors apply to.

use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Colors fill the badge background.
    #[default]
    Background,
    /// Colors apply to the badge text.
    Text,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Background, DisplayMode::Text];

    /// The value persisted in the option store.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Background => "background",
            DisplayMode::Text => "text",
        }
    }

    /// The human label shown in the settings select.
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Background => "Background",
            DisplayMode::Text => "Text",
        }
    }

    /// The CSS property a color rule sets in this mode.
    pub fn css_property(self) -> &'static str {
        match self {
            DisplayMode::Background => "background-color",
            DisplayMode::Text => "color",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "background" => Ok(DisplayMode::Background),
            "text" => Ok(DisplayMode::Text),
            other => Err(ModelError::InvalidDisplayMode(other.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
