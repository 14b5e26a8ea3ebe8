//! Permissive per-name patterns
//!
//! A pattern accepts any query whose characters appear, in order, in the
//! canonical name: every character of the name is optional. On top of that a
//! few spelling equivalences are built in (gray/grey, ocher/ochre, accented
//! letters and their bases).

use regex::Regex;

use super::fold::fold_char;

/// Pattern fragments for spelling variants, keyed by lowercase source text.
const EQUIVALENCES: &[(&str, &str)] = &[
    ("gray", "g?r?[ae]?y?"),
    ("grey", "g?r?[ae]?y?"),
    ("ocher", "o?c?h?(?:er|re|e|r)?"),
    ("ochre", "o?c?h?(?:er|re|e|r)?"),
];

/// Compiled matcher for one canonical name.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Option<Regex>,
    /// Folded lowercase canonical form, used when the regex is unavailable
    key: String,
}

impl NamePattern {
    /// Builds the pattern for `canonical`.
    ///
    /// `key` is the folded lowercase form of the same name; a pattern that
    /// fails to compile degrades to exact comparison against it.
    pub fn new(canonical: &str, key: &str) -> Self {
        let source = pattern_source(canonical);
        let regex = match Regex::new(&source) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(name = %canonical, error = %e, "name pattern rejected, using exact match");
                None
            }
        };
        Self {
            regex,
            key: key.to_string(),
        }
    }

    /// Whether a normalized query is consistent with this name.
    pub fn is_match(&self, query: &str) -> bool {
        match &self.regex {
            Some(re) => re.is_match(query),
            None => self.key == query,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

/// Regex source accepting every in-order subsequence of `canonical`.
pub fn pattern_source(canonical: &str) -> String {
    let chars: Vec<char> = canonical.chars().collect();
    let mut out = String::from("(?i)^");
    let mut i = 0;
    while i < chars.len() {
        if let Some((len, fragment)) = equivalence_at(&chars[i..]) {
            out.push_str(fragment);
            i += len;
            continue;
        }
        let c = chars[i];
        if c.is_whitespace() {
            out.push_str(r"\s?");
        } else if let Some(base) = fold_char(c) {
            out.push('[');
            out.push_str(&regex::escape(&c.to_string()));
            out.push_str(&regex::escape(&base.to_string()));
            out.push_str("]?");
        } else {
            out.push_str("(?:");
            out.push_str(&regex::escape(&c.to_string()));
            out.push_str(")?");
        }
        i += 1;
    }
    out.push('$');
    out
}

fn equivalence_at(chars: &[char]) -> Option<(usize, &'static str)> {
    EQUIVALENCES.iter().find_map(|&(word, fragment)| {
        let len = word.chars().count();
        let matches = chars.len() >= len
            && chars[..len]
                .iter()
                .zip(word.chars())
                .all(|(&c, w)| c.to_lowercase().eq(std::iter::once(w)));
        matches.then_some((len, fragment))
    })
}
