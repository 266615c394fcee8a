//! HTML fragments: the page-head style element and the category badge.

use catcolors_model::Term;

/// Wrap a stylesheet in the `<style>` element injected into the page head.
pub fn style_tag(id: &str, css: &str) -> String {
    format!("<style id='{id}'>\n{css}</style>\n")
}

/// Markup for a listing's category badge.
///
/// The class list matches the rules emitted by the CSS generator. A listing
/// without a category gets the bare base class and no text.
pub fn category_badge(prefix: &str, term: Option<&Term>) -> String {
    match term {
        Some(term) => format!(
            "<li class=\"{prefix} {}\">{}</li>",
            term.slug,
            escape_html(&term.name)
        ),
        None => format!("<li class=\"{prefix} \"></li>"),
    }
}

/// The category a listing is displayed under: the first one assigned.
pub fn primary_category(assigned: &[Term]) -> Option<&Term> {
    assigned.first()
}

/// Escape text for use in element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}
