//! Name normalization
//!
//! Everything needed to match free text against one palette's names is
//! computed once into a [`NormalizationState`]: the canonical split form of
//! each name, a permissive [`NamePattern`] per name, and the exact
//! [`AliasTable`]. Queries are put through the same normalization as the names
//! before they are compared.

mod alias;
mod fold;
mod levenshtein;
mod normalize;
mod pattern;

pub use alias::AliasTable;
pub use fold::{fold, fold_char};
pub use levenshtein::levenshtein;
pub use normalize::{
    canonical_form, canonicalize_punctuation, collapse_whitespace, index_token, CaseClasses,
};
pub use pattern::{pattern_source, NamePattern};

use regex::Regex;

use crate::catalog::ColorEntry;

/// Per-palette matching structures, indexed by entry position.
#[derive(Debug, Clone)]
pub struct NormalizationState {
    case: CaseClasses,
    index: Option<Regex>,
    canonical: Vec<String>,
    keys: Vec<String>,
    index_tokens: Vec<Option<String>>,
    patterns: Vec<NamePattern>,
    aliases: AliasTable,
}

impl NormalizationState {
    /// Derives the structures from a palette's entries. Deterministic: the
    /// same entries always give the same state.
    pub fn build(entries: &[ColorEntry], index: Option<&Regex>) -> Self {
        let case = CaseClasses::observe(entries.iter().map(|e| e.name.as_str()));

        let canonical: Vec<String> = entries
            .iter()
            .map(|e| canonical_form(&e.name, index, &case))
            .collect();
        let keys: Vec<String> = canonical.iter().map(|c| fold(c).to_lowercase()).collect();
        let index_tokens: Vec<Option<String>> = canonical
            .iter()
            .map(|c| index_token(c, index).map(str::to_string))
            .collect();
        let patterns = canonical
            .iter()
            .zip(&keys)
            .map(|(c, k)| NamePattern::new(c, k))
            .collect();
        let aliases = AliasTable::build(&index_tokens, &keys);

        Self {
            case,
            index: index.cloned(),
            canonical,
            keys,
            index_tokens,
            patterns,
            aliases,
        }
    }

    /// Normalizes a query the way names are normalized, then folds
    /// diacritics and lowercases it.
    pub fn normalize_query(&self, query: &str) -> String {
        fold(&canonical_form(query, self.index.as_ref(), &self.case)).to_lowercase()
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Canonical split form of an entry's name.
    pub fn canonical(&self, entry: usize) -> &str {
        &self.canonical[entry]
    }

    /// Folded lowercase canonical forms, one per entry.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn patterns(&self) -> &[NamePattern] {
        &self.patterns
    }

    pub fn index_token(&self, entry: usize) -> Option<&str> {
        self.index_tokens[entry].as_deref()
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn case_classes(&self) -> &CaseClasses {
        &self.case
    }
}
