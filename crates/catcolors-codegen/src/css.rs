//! CSS code generator.
//!
//! Emits the badge boilerplate followed by one color rule per category:
//!
//! ```text
//! .job-category.sales { background-color: #ff0000; }
//! ```

use crate::config::Config;
use crate::CodegenError;
use catcolors_model::{Color, DisplayMode, Slug, Term};
use tracing::{debug, warn};

/// Badge styling shared by every category. Only the class name varies.
fn base_rules(prefix: &str) -> String {
    let prefix = css_ident(prefix);
    format!(
        ".{prefix} {{font: bold 12px/normal 'Montserrat', sans-serif;text-transform: uppercase;color: #fff;padding: 3px 10px;border-radius: 4px;}}\
         li.{prefix}{{text-align:center;padding: 3px 10px;border-right: 0;}}"
    )
}

/// Renders category color rules for a given configuration.
pub struct StyleRenderer<'a> {
    config: &'a Config,
}

impl<'a> StyleRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render the stylesheet. Every term gets exactly one rule, in input
    /// order; terms without a usable color get the configured default.
    pub fn render<F>(&self, terms: &[Term], mode: DisplayMode, color_of: F) -> String
    where
        F: Fn(&Slug) -> Option<String>,
    {
        let prefix = css_ident(&self.config.selector_prefix);
        let property = mode.css_property();

        let mut css = base_rules(&self.config.selector_prefix);
        css.push('\n');

        for term in terms {
            let color = self.resolve_color(&term.slug, color_of(&term.slug));
            css.push_str(&format!(
                ".{prefix}.{} {{ {property}: {color}; }}\n",
                css_ident(term.slug.as_str())
            ));
        }

        debug!(terms = terms.len(), %mode, "rendered category color rules");
        css
    }

    fn resolve_color(&self, slug: &Slug, stored: Option<String>) -> Color {
        let Some(raw) = stored.filter(|v| !v.trim().is_empty()) else {
            return self.config.default_color.clone();
        };
        match Color::parse(&raw) {
            Ok(color) => color,
            Err(e) => {
                warn!(%slug, "ignoring stored color: {e}");
                self.config.default_color.clone()
            }
        }
    }
}

/// Render with the default configuration.
pub fn render_css<F>(terms: &[Term], mode: DisplayMode, color_of: F) -> String
where
    F: Fn(&Slug) -> Option<String>,
{
    StyleRenderer::new(&Config::default()).render(terms, mode, color_of)
}

/// Render from a stored mode value. An unknown mode is an error, never a
/// silent fallback.
pub fn render_css_for_mode<F>(
    terms: &[Term],
    mode: &str,
    color_of: F,
) -> Result<String, CodegenError>
where
    F: Fn(&Slug) -> Option<String>,
{
    let mode: DisplayMode = mode.parse()?;
    Ok(render_css(terms, mode, color_of))
}

/// Escape a slug for use as a class selector. Slugs only hold
/// `[A-Za-z0-9_-]`, so only the leading-digit cases need escaping.
pub fn css_ident(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len() + 4);
    let mut chars = slug.chars();

    match chars.next() {
        Some('-') => {
            let rest = chars.as_str();
            match rest.chars().next() {
                None => out.push_str("\\-"),
                Some(d) if d.is_ascii_digit() => {
                    out.push('-');
                    out.push_str(&format!("\\3{d} "));
                    out.push_str(&rest[1..]);
                }
                Some(_) => {
                    out.push('-');
                    out.push_str(rest);
                }
            }
        }
        Some(d) if d.is_ascii_digit() => {
            out.push_str(&format!("\\3{d} "));
            out.push_str(chars.as_str());
        }
        Some(c) => {
            out.push(c);
            out.push_str(chars.as_str());
        }
        None => {}
    }

    out
}
