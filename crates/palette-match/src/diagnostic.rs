//! Suggestions for names that matched nothing
//!
//! Every alias form of every entry (its folded canonical name, its index
//! token, its initial-letter alias) is scored by edit distance against the
//! normalized query. Each entry keeps its best form; entries are then ordered
//! by `(distance, entry position)` and truncated.

use crate::names::{levenshtein, NormalizationState};

/// One ranked suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub entry: usize,
    pub distance: usize,
}

/// Ranks entries of a palette by how close they come to `query`.
///
/// `query` must already be normalized with
/// [`NormalizationState::normalize_query`].
pub fn rank(state: &NormalizationState, query: &str, limit: usize) -> Vec<Suggestion> {
    let mut ranked: Vec<Suggestion> = state
        .keys()
        .iter()
        .enumerate()
        .map(|(entry, key)| {
            let forms = std::iter::once(key.as_str())
                .chain(state.index_token(entry))
                .chain(state.aliases().aliases_of(entry).iter().map(String::as_str));
            let distance = forms
                .map(|form| levenshtein(query, &form.to_lowercase()))
                .min()
                .unwrap_or(usize::MAX);
            Suggestion { entry, distance }
        })
        .collect();
    // Stable, so equal distances keep palette order
    ranked.sort_by_key(|s| s.distance);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorEntry;
    use crate::color::Srgb;

    fn state(names: &[&str]) -> NormalizationState {
        let entries: Vec<ColorEntry> = names
            .iter()
            .enumerate()
            .map(|(index, name)| ColorEntry {
                name: name.to_string(),
                rgb: Srgb::new(0.0, 0.0, 0.0),
                index,
            })
            .collect();
        NormalizationState::build(&entries, None)
    }

    #[test]
    fn test_closest_first() {
        let s = state(&["Aqua", "Fuchsia", "Maroon", "Teal"]);
        let ranked = rank(&s, "marone", 2);
        assert_eq!(ranked[0], Suggestion { entry: 2, distance: 2 });
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_best_alias_form_counts() {
        // "z" is one edit away from every single-letter alias
        let s = state(&["Black", "Blue", "Green", "Red", "White", "Yellow"]);
        let ranked = rank(&s, "z", 10);
        assert_eq!(ranked.len(), 6);
        assert!(ranked.iter().all(|r| r.distance == 1));
        assert_eq!(
            ranked.iter().map(|r| r.entry).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_ties_keep_palette_order() {
        let s = state(&["Gray", "Grey", "Green"]);
        let ranked = rank(&s, "grxy", 3);
        assert_eq!(
            ranked,
            vec![
                Suggestion { entry: 0, distance: 1 },
                Suggestion { entry: 1, distance: 1 },
                Suggestion { entry: 2, distance: 3 },
            ]
        );
    }

    #[test]
    fn test_zero_limit() {
        let s = state(&["Red"]);
        assert!(rank(&s, "x", 0).is_empty());
    }
}
