//! Job Category Colors model
//!
//! The shared vocabulary of the color pipeline: taxonomy terms and their
//! selector-safe slugs, the display mode, hex colors, and the option-key
//! naming scheme the host's option store persists assignments under.
//! The host collaborators (term provider, option store) are traits here so
//! the generators never touch the platform directly.
//!
//! # Example
//!
//! ```
//! use catcolors_model::{OptionKeys, Slug};
//!
//! let slug = Slug::parse("sales").unwrap();
//! assert_eq!(OptionKeys::default().color_key(&slug), "job_manager_job_cat_sales_color");
//! ```

pub mod color;
pub mod keys;
pub mod mode;
pub mod store;
pub mod term;

pub use color::Color;
pub use keys::OptionKeys;
pub use mode::DisplayMode;
pub use store::{MemoryOptionStore, OptionStore, StaticTermProvider, TermProvider, TermRecord};
pub use term::{Slug, Term};

/// Taxonomy the job categories live in.
pub const JOB_CATEGORY_TAXONOMY: &str = "job_listing_category";

/// Model validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid slug {slug:?}: {reason}")]
    InvalidSlug { slug: String, reason: String },

    #[error("Invalid display mode {0:?}: expected \"background\" or \"text\"")]
    InvalidDisplayMode(String),

    #[error("Invalid color {0:?}: expected a hex color like #ff0000")]
    InvalidColor(String),
}
