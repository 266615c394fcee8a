//! Taxonomy terms and their slugs.

use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A term slug that is safe to use as a CSS class name and in an option key.
///
/// Only ASCII letters, digits, `-` and `_` are accepted. A leading digit is
/// still legal here; the CSS generator escapes it when building selectors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate an existing slug.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        if raw.is_empty() {
            return Err(invalid(raw, "slug is empty"));
        }
        if let Some(ch) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(invalid(raw, &format!("character {ch:?} is not allowed")));
        }
        Ok(Self(raw.to_string()))
    }

    /// Derive a slug from free text, the way the host sanitizes titles:
    /// transliterate to ASCII, lowercase, and collapse everything that is not
    /// a letter, digit or underscore into single hyphens.
    pub fn sanitize(text: &str) -> Result<Self, ModelError> {
        let ascii = deunicode::deunicode(text).to_lowercase();
        let mut slug = String::with_capacity(ascii.len());
        let mut pending_hyphen = false;

        for ch in ascii.chars() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(ch);
            } else if ch.is_whitespace() || ch == '-' {
                pending_hyphen = true;
            }
            // Other punctuation is dropped without separating words.
        }

        if slug.is_empty() {
            return Err(invalid(text, "nothing left after sanitizing"));
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(slug: &str, reason: &str) -> ModelError {
    ModelError::InvalidSlug {
        slug: slug.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = ModelError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Slug::parse(&raw)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// A job category term as supplied by the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub slug: Slug,
    pub name: String,
}

impl Term {
    /// Build a term, validating the slug.
    pub fn new(slug: &str, name: impl Into<String>) -> Result<Self, ModelError> {
        Ok(Self {
            slug: Slug::parse(slug)?,
            name: name.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain_slug() {
        assert_eq!(Slug::parse("sales").unwrap().as_str(), "sales");
    }

    #[test]
    fn test_parse_hyphen_underscore_digits() {
        assert_eq!(Slug::parse("web_dev-2").unwrap().as_str(), "web_dev-2");
        assert_eq!(Slug::parse("2024-jobs").unwrap().as_str(), "2024-jobs");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            Slug::parse(""),
            Err(ModelError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_selector_breakers() {
        for bad in ["a b", "x{y}", "a.b", "a,b", "a>b", "sales;", "%e6%97"] {
            assert!(Slug::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_parse_error_names_character() {
        let err = Slug::parse("a b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid slug \"a b\": character ' ' is not allowed"
        );
    }

    #[test]
    fn test_parse_keeps_class_safe_non_identifiers() {
        assert_eq!(Slug::parse("9lives").unwrap().as_str(), "9lives");
        assert_eq!(Slug::parse("Sales").unwrap().as_str(), "Sales");
        assert_eq!(Slug::parse("-").unwrap().as_str(), "-");
    }

    #[test]
    fn test_sanitize_drops_inner_punctuation() {
        assert_eq!(Slug::sanitize("a.b").unwrap().as_str(), "ab");
        assert_eq!(Slug::sanitize("-Sales-").unwrap().as_str(), "sales");
    }

    #[test]
    fn test_sanitize_transliterates() {
        assert_eq!(Slug::sanitize("Café Sales!").unwrap().as_str(), "cafe-sales");
    }

    #[test]
    fn test_sanitize_collapses_separators() {
        assert_eq!(
            Slug::sanitize("  Human -- Resources  ").unwrap().as_str(),
            "human-resources"
        );
    }

    #[test]
    fn test_sanitize_drops_punctuation() {
        assert_eq!(Slug::sanitize("R&D").unwrap().as_str(), "rd");
    }

    #[test]
    fn test_sanitize_nothing_left() {
        assert!(Slug::sanitize("!!!").is_err());
    }

    #[test]
    fn test_term_new_validates() {
        assert!(Term::new("it", "IT").is_ok());
        assert!(Term::new("i t", "IT").is_err());
    }

    #[test]
    fn test_term_deserialize_validates_slug() {
        let ok: Result<Term, _> = toml::from_str("slug = \"sales\"\nname = \"Sales\"");
        assert_eq!(ok.unwrap(), Term::new("sales", "Sales").unwrap());

        let bad: Result<Term, _> = toml::from_str("slug = \"x{y}\"\nname = \"X\"");
        assert!(bad.is_err());
    }
}
