//! palette-match: resolve colors against named palettes
//!
//! Two directions of lookup over a [`Catalog`] of palettes:
//!
//! - **By name**: free text such as `"darkslategrey"`, `"K"` or `"1001"` is
//!   resolved to the entry it most plausibly names, tolerating case, spacing,
//!   punctuation, abbreviation and leading-index variation.
//! - **By color**: an sRGB sample is resolved to the perceptually closest
//!   entry under a selectable [`DistanceMetric`].
//!
//! # Quick Start
//!
//! ```
//! use palette_match::{Catalog, IndexSpec, PaletteMetadata, RawPalette, RgbData};
//!
//! let primaries = RawPalette {
//!     key: "Primaries".to_string(),
//!     names: vec!["Red".into(), "Green".into(), "Blue".into()],
//!     rgb: RgbData::Float(vec![
//!         vec![1.0, 0.0, 0.0],
//!         vec![0.0, 1.0, 0.0],
//!         vec![0.0, 0.0, 1.0],
//!     ]),
//!     index: IndexSpec::None,
//!     metadata: PaletteMetadata::default(),
//! };
//! let catalog = Catalog::load([primaries]).unwrap();
//!
//! let named = catalog.resolve_names("primaries", &["grn", "B"]).unwrap();
//! assert_eq!(named[0].name, "Green");
//! assert_eq!(named[1].name, "Blue");
//!
//! let nearest = catalog
//!     .resolve_colors("primaries", &[[0.9, 0.1, 0.2]], None)
//!     .unwrap();
//! assert_eq!(nearest[0].entry.name, "Red");
//! ```
//!
//! # Name Matching
//!
//! Each palette lazily builds a [`NormalizationState`] on its first name
//! query. A query is normalized the same way as the names, then:
//!
//! 1. an exact hit in the alias table (index token or unique initial) wins;
//! 2. otherwise every name whose permissive pattern accepts the query is a
//!    candidate;
//! 3. several candidates are ranked by Levenshtein distance, ties going to
//!    the entry that comes first in the palette.
//!
//! When nothing matches, the error carries ranked suggestions for every
//! failed query.
//!
//! # Color Matching
//!
//! Samples and entries are projected into the metric's working space
//! ([`color`] holds the conversions) and compared with
//! [`DistanceMetric::compare`]. The default is CIE94 with graphic-arts
//! weights. CIE94 and CMC treat the palette entry as the reference color.

pub mod catalog;
pub mod color;
pub mod diagnostic;
pub mod error;
pub mod matcher;
pub mod metric;
pub mod names;

#[cfg(test)]
mod domain_tests;

pub use catalog::{
    BitDepth, Catalog, ColorEntry, IndexSpec, PaletteMetadata, PaletteRecord, RawPalette, RgbData,
    DEFAULT_SUGGESTION_LIMIT,
};
pub use color::{ColorReport, Din99, Hsv, Lab, Lch, LinearRgb, Oklab, Srgb, Xyz};
pub use error::{
    InvalidComponent, ParseColorError, QueryError, UnmatchedName, UnsupportedMetric,
    ValidationError,
};
pub use matcher::{ColorMatch, NameMatch};
pub use metric::{Cie94Application, CmcRatio, DistanceMetric};
pub use names::NormalizationState;
