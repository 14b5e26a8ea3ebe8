use crate::catalog::{ColorEntry, PaletteRecord};
use crate::color::Srgb;
use crate::error::{InvalidComponent, QueryError};
use crate::metric::DistanceMetric;

/// Nearest palette entry for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatch<'a> {
    pub entry: &'a ColorEntry,
    /// Distance from the entry to the sample under the metric used
    pub distance: f64,
}

/// Every component that is not a finite value in `[0, 1]`.
fn invalid_components(samples: &[[f64; 3]]) -> Vec<InvalidComponent> {
    samples
        .iter()
        .enumerate()
        .flat_map(|(row, sample)| {
            sample
                .iter()
                .enumerate()
                .filter(|(_, v)| !v.is_finite() || !(0.0..=1.0).contains(*v))
                .map(move |(column, &value)| InvalidComponent { row, column, value })
        })
        .collect()
}

pub(crate) fn resolve_colors<'a>(
    palette: &'a PaletteRecord,
    samples: &[[f64; 3]],
    metric: DistanceMetric,
) -> Result<Vec<ColorMatch<'a>>, QueryError> {
    let invalid = invalid_components(samples);
    if !invalid.is_empty() {
        return Err(QueryError::InvalidInput {
            palette: palette.key().to_string(),
            invalid,
        });
    }

    let entries = palette.entries();
    let projected: Vec<[f64; 3]> = entries.iter().map(|e| metric.project(e.rgb)).collect();
    tracing::trace!(palette = %palette.key(), %metric, samples = samples.len(), "color query");

    let matches = samples
        .iter()
        .map(|&sample| {
            let query = metric.project(Srgb::from(sample));
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (i, &candidate) in projected.iter().enumerate() {
                let distance = metric.compare(candidate, query);
                if distance < best_distance {
                    best = i;
                    best_distance = distance;
                }
            }
            ColorMatch {
                entry: &entries[best],
                distance: best_distance,
            }
        })
        .collect();
    Ok(matches)
}
