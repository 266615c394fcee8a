//! Hex colors as stored by the color picker.

use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated CSS hex color (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`).
///
/// The text is kept as entered (minus surrounding whitespace) so rendered
/// rules echo exactly what the administrator picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ModelError::InvalidColor(raw.to_string()))?;

        let valid_len = matches!(digits.len(), 3 | 4 | 6 | 8);
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ModelError::InvalidColor(raw.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The fallback for categories without an assigned color.
    pub fn white() -> Self {
        Self("#ffffff".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ModelError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Color::parse(&raw)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!(Color::parse("#ff0000").unwrap().as_str(), "#ff0000");
        assert_eq!(Color::parse("#FFF").unwrap().as_str(), "#FFF");
        assert_eq!(Color::parse("#11223344").unwrap().as_str(), "#11223344");
        assert_eq!(Color::parse("#abcd").unwrap().as_str(), "#abcd");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Color::parse("  #00ff00 ").unwrap().as_str(), "#00ff00");
    }

    #[test]
    fn test_parse_rejects_missing_hash() {
        assert!(Color::parse("ff0000").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_length_and_digits() {
        for bad in ["#", "#ff", "#fffff", "#gggggg", "", "#fff; } body { display: none"] {
            assert!(Color::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_white() {
        assert_eq!(Color::white().to_string(), "#ffffff");
    }
}
