//! Query resolution against a single palette
//!
//! - [`names`]: free text to entries, via aliases, patterns and edit distance
//! - [`colors`]: sRGB samples to their nearest entries under a metric

mod colors;
mod names;

pub use colors::ColorMatch;
pub(crate) use colors::resolve_colors;
pub(crate) use names::resolve_names;
pub use names::{match_name, NameMatch};
