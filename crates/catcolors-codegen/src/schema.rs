//! Settings schema generator.
//!
//! Produces the field descriptors the host's settings screen renders and
//! persists: the display-mode select, one color picker per category, and the
//! hidden usage notes, always in that order.

use crate::config::Config;
use crate::html::escape_html;
use catcolors_model::{DisplayMode, Term};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Usage notes shown under the color fields. Static markup asset.
pub const USAGE_INSTRUCTIONS: &str = concat!(
    "You will need to place this code somewhere in your template file to display the category with the styling:<br/>",
    "<code>&lt;li class=&quot;job-category &lt;?php echo get_the_job_category() ? sanitize_title( get_the_job_category()-&gt;slug ) : &#039;&#039;; ?&gt;&quot;&gt;&lt;?php the_job_category(); ?&gt;&lt;/li&gt;</code><br/><br/>",
    "You can customize the WP Job Manager templates by saving the template file from location below to the root of your theme directory.<br/><br/>",
    "<code>/themes/jobify/content-single-job.php</code>  -  Would be the file for Jobify theme for job detail heading<br/><br/>",
    "<code>/plugins/wp-job-manager/templates/content-single-job_listing.php</code>  -  WP Job Manager Template<br/><br/>",
    "<code>/plugins/wp-job-manager/templates/content-job_listing.php</code>  -  WP Job Manager Template<br/>",
);

const MODE_DESCRIPTION: &str =
    "Should these colors be applied to the text color, or background color?";
const COLOR_DESCRIPTION: &str = "Hex value for the color of this job category.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Select,
    Color,
    StaticText,
}

/// One option of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

/// A declarative description of one setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub kind: FieldKind,
    pub label: String,
    pub description: String,
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
    /// Extra attributes for the consuming UI (placeholder, picker markers).
    pub metadata: BTreeMap<String, String>,
}

/// Builds the color settings schema for a configuration.
pub struct SchemaBuilder<'a> {
    config: &'a Config,
}

impl<'a> SchemaBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(&self, terms: &[Term]) -> Vec<FieldDescriptor> {
        let mut fields = Vec::with_capacity(terms.len() + 2);
        fields.push(self.mode_field());
        fields.extend(terms.iter().map(|term| self.color_field(term)));
        fields.push(self.usage_field());
        fields
    }

    fn mode_field(&self) -> FieldDescriptor {
        let choices = DisplayMode::ALL
            .iter()
            .map(|mode| Choice {
                value: mode.as_str().into(),
                label: mode.label().into(),
            })
            .collect();

        FieldDescriptor {
            key: self.config.keys().mode_key(),
            kind: FieldKind::Select,
            label: "What".into(),
            description: MODE_DESCRIPTION.into(),
            default: DisplayMode::default().as_str().into(),
            choices: Some(choices),
            metadata: metadata(&[("placeholder", "")]),
        }
    }

    fn color_field(&self, term: &Term) -> FieldDescriptor {
        let keys = self.config.keys();
        if keys.collides_with_fixed_key(&term.slug) {
            warn!(slug = %term.slug, "category color key shadows a fixed settings key");
        }

        FieldDescriptor {
            key: keys.color_key(&term.slug),
            kind: FieldKind::Color,
            label: format!("<strong>{}</strong>", escape_html(&term.name)),
            description: COLOR_DESCRIPTION.into(),
            default: String::new(),
            choices: None,
            metadata: metadata(&[
                ("placeholder", "#"),
                ("data-default-color", self.config.default_color.as_str()),
                ("data-type", "colorpicker"),
            ]),
        }
    }

    fn usage_field(&self) -> FieldDescriptor {
        FieldDescriptor {
            key: self.config.keys().usage_key(),
            kind: FieldKind::StaticText,
            label: "Usage".into(),
            description: USAGE_INSTRUCTIONS.into(),
            default: String::new(),
            choices: None,
            metadata: metadata(&[("style", "display: none;"), ("hidden", "true")]),
        }
    }
}

fn metadata(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build the schema with the default configuration.
pub fn build_schema(terms: &[Term]) -> Vec<FieldDescriptor> {
    SchemaBuilder::new(&Config::default()).build(terms)
}
