use crate::catalog::{ColorEntry, PaletteRecord};
use crate::diagnostic;
use crate::error::{QueryError, UnmatchedName};
use crate::names::{levenshtein, NormalizationState};

/// How a single query was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Exact hit in the alias table
    Alias(usize),
    /// The only entry whose pattern accepted the query
    Pattern(usize),
    /// Several patterns accepted the query; closest by edit distance
    Closest { entry: usize, distance: usize },
    Unmatched,
}

impl NameMatch {
    pub fn entry(self) -> Option<usize> {
        match self {
            NameMatch::Alias(i) | NameMatch::Pattern(i) => Some(i),
            NameMatch::Closest { entry, .. } => Some(entry),
            NameMatch::Unmatched => None,
        }
    }
}

/// Resolves one normalized query.
pub fn match_name(state: &NormalizationState, query: &str) -> NameMatch {
    if query.is_empty() {
        return NameMatch::Unmatched;
    }
    if let Some(entry) = state.aliases().get(query) {
        return NameMatch::Alias(entry);
    }

    // Separators in the query never block a pattern; every name char is optional
    let compact: String = query.chars().filter(|c| c.is_alphanumeric()).collect();
    if compact.is_empty() {
        return NameMatch::Unmatched;
    }

    let candidates: Vec<usize> = state
        .patterns()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_match(&compact))
        .map(|(i, _)| i)
        .collect();

    match candidates.as_slice() {
        [] => NameMatch::Unmatched,
        [only] => NameMatch::Pattern(*only),
        _ => {
            let mut best: Option<(usize, usize)> = None;
            for &entry in &candidates {
                let distance = levenshtein(query, &state.keys()[entry]);
                // Strict comparison keeps the lowest index on ties
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((entry, distance));
                }
            }
            match best {
                Some((entry, distance)) => NameMatch::Closest { entry, distance },
                None => NameMatch::Unmatched,
            }
        }
    }
}

pub(crate) fn resolve_names<'a, S: AsRef<str>>(
    palette: &'a PaletteRecord,
    queries: &[S],
    suggestion_limit: usize,
) -> Result<Vec<&'a ColorEntry>, QueryError> {
    let state = palette.normalization();
    let entries = palette.entries();

    let mut resolved = Vec::with_capacity(queries.len());
    let mut unmatched = Vec::new();
    for (position, query) in queries.iter().enumerate() {
        let raw = query.as_ref();
        let normalized = state.normalize_query(raw);
        let outcome = match_name(state, &normalized);
        tracing::trace!(palette = %palette.key(), query = %raw, ?outcome, "name query");
        match outcome.entry() {
            Some(entry) => resolved.push(&entries[entry]),
            None => {
                let suggestions = diagnostic::rank(state, &normalized, suggestion_limit)
                    .into_iter()
                    .map(|s| entries[s.entry].name.clone())
                    .collect();
                unmatched.push(UnmatchedName {
                    position,
                    query: raw.to_string(),
                    suggestions,
                });
            }
        }
    }

    if unmatched.is_empty() {
        Ok(resolved)
    } else {
        tracing::debug!(palette = %palette.key(), unmatched = unmatched.len(), "name queries unmatched");
        Err(QueryError::UnmatchedNames {
            palette: palette.key().to_string(),
            unmatched,
        })
    }
}
