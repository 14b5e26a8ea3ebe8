//! Validated, immutable store of named palettes
//!
//! A [`Catalog`] is built once from [`RawPalette`]s supplied by an external
//! loader and never mutated afterwards. It is the single entry point for the
//! query operations: listing, fetching, and resolving names or colors.

mod natural;
mod palette;

use std::collections::HashSet;

pub use natural::natural_cmp;
pub use palette::{
    BitDepth, ColorEntry, IndexSpec, PaletteMetadata, PaletteRecord, RawPalette, RgbData,
};

use crate::error::{QueryError, ValidationError};
use crate::matcher::{self, ColorMatch};
use crate::metric::DistanceMetric;

/// Default number of suggestions reported per unmatched name.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// The loaded set of palettes.
#[derive(Debug)]
pub struct Catalog {
    palettes: Vec<PaletteRecord>,
    suggestion_limit: usize,
}

impl Catalog {
    /// Validates every palette and builds the catalog.
    ///
    /// Fails on the first invalid palette. Palettes are ordered by their key
    /// in natural order regardless of the order they were supplied in.
    pub fn load(raw: impl IntoIterator<Item = RawPalette>) -> Result<Self, ValidationError> {
        let mut palettes = Vec::new();
        let mut keys = HashSet::new();
        for palette in raw {
            if !keys.insert(palette.key.to_lowercase()) {
                return Err(ValidationError::new(
                    &palette.key,
                    "key",
                    "is used by more than one palette",
                ));
            }
            let record = palette.validate()?;
            tracing::debug!(palette = %record.key(), entries = record.len(), "palette validated");
            palettes.push(record);
        }
        palettes.sort_by(|a, b| natural_cmp(a.key(), b.key()));
        tracing::info!(palettes = palettes.len(), "catalog loaded");
        Ok(Self {
            palettes,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        })
    }

    /// Sets how many suggestions accompany each unmatched name.
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    /// Palette keys in catalog order.
    pub fn list_palettes(&self) -> Vec<&str> {
        self.palettes.iter().map(PaletteRecord::key).collect()
    }

    pub fn palettes(&self) -> impl Iterator<Item = &PaletteRecord> {
        self.palettes.iter()
    }

    /// Case-insensitive exact lookup of a palette record.
    pub fn palette(&self, key: &str) -> Result<&PaletteRecord, QueryError> {
        let wanted = key.to_lowercase();
        self.palettes
            .iter()
            .find(|p| p.key().to_lowercase() == wanted)
            .ok_or_else(|| QueryError::UnknownPalette {
                key: key.to_string(),
                valid: self.palettes.iter().map(|p| p.key().to_string()).collect(),
            })
    }

    /// Entries of a palette in natural-sort order.
    pub fn get_palette(&self, key: &str) -> Result<&[ColorEntry], QueryError> {
        self.palette(key).map(PaletteRecord::entries)
    }

    /// Resolves each query to the entry its text most plausibly names.
    ///
    /// Either every query resolves, or the call fails with every unmatched
    /// query and its suggestions.
    pub fn resolve_names<S: AsRef<str>>(
        &self,
        key: &str,
        queries: &[S],
    ) -> Result<Vec<&ColorEntry>, QueryError> {
        let palette = self.palette(key)?;
        matcher::resolve_names(palette, queries, self.suggestion_limit)
    }

    /// Resolves each sRGB sample to its nearest entry under `metric`
    /// (CIE94 graphic arts when `None`).
    pub fn resolve_colors(
        &self,
        key: &str,
        samples: &[[f64; 3]],
        metric: Option<DistanceMetric>,
    ) -> Result<Vec<ColorMatch<'_>>, QueryError> {
        let palette = self.palette(key)?;
        matcher::resolve_colors(palette, samples, metric.unwrap_or_default())
    }
}
