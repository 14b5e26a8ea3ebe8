//! Error types for catalog loading and queries
//!
//! Load-time problems surface as [`ValidationError`]; everything a query can
//! fail with is a [`QueryError`]. Query errors carry enough context (palette
//! key, offending input, ranked alternatives) for a caller to correct the
//! request without a second call.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// A palette failed validation while the catalog was being loaded.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid palette {palette:?}: field `{field}` {reason}")]
pub struct ValidationError {
    /// Key of the offending palette (as supplied)
    pub palette: String,
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub reason: String,
}

impl ValidationError {
    pub(crate) fn new(palette: &str, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            palette: palette.to_string(),
            field,
            reason: reason.into(),
        }
    }
}

/// A metric name that is not one of [`DistanceMetric::NAMES`](crate::DistanceMetric::NAMES).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unsupported metric {name:?} (expected one of: {})", .valid.join(", "))]
pub struct UnsupportedMetric {
    pub name: String,
    pub valid: Vec<&'static str>,
}

/// A name query that matched no entry, with the closest alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedName {
    /// Position of the query within the batch
    pub position: usize,
    /// The query text as supplied
    pub query: String,
    /// Entry names ordered by ascending edit distance
    pub suggestions: Vec<String>,
}

impl fmt::Display for UnmatchedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.query)?;
        if !self.suggestions.is_empty() {
            write!(f, " (did you mean: {})", self.suggestions.join(", "))?;
        }
        Ok(())
    }
}

/// One out-of-range or non-finite component of a color sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidComponent {
    pub row: usize,
    pub column: usize,
    pub value: f64,
}

impl fmt::Display for InvalidComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}] = {}", self.row, self.column, self.value)
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("unknown palette {key:?} (expected one of: {})", .valid.join(", "))]
    UnknownPalette { key: String, valid: Vec<String> },

    #[error("no color in palette {palette:?} matches {}", join(.unmatched))]
    UnmatchedNames {
        palette: String,
        unmatched: Vec<UnmatchedName>,
    },

    #[error(
        "color samples for palette {palette:?} must be finite values in [0, 1]: {}",
        join(.invalid)
    )]
    InvalidInput {
        palette: String,
        invalid: Vec<InvalidComponent>,
    },

    #[error(transparent)]
    UnsupportedMetric(#[from] UnsupportedMetric),
}
