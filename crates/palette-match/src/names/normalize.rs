//! Canonical split forms of color names

use std::collections::HashSet;

use regex::Regex;

const APOSTROPHES: &[char] = &[
    '\u{0060}', '\u{00B4}', '\u{02B9}', '\u{02BC}', '\u{2018}', '\u{2019}', '\u{201B}', '\u{2032}',
    '\u{FF07}',
];
const HYPHENS: &[char] = &[
    '\u{00AD}', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
    '\u{FE63}', '\u{FF0D}',
];
const PLUSES: &[char] = &['\u{02D6}', '\u{2795}', '\u{FE62}', '\u{FF0B}'];

/// Upper- and lowercase letters observed in one palette's names.
///
/// CamelCase boundaries are only inserted between letters the palette itself
/// uses, so scripts without case (and names in all capitals) stay intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseClasses {
    upper: HashSet<char>,
    lower: HashSet<char>,
}

impl CaseClasses {
    pub fn observe<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut classes = Self::default();
        for c in names.into_iter().flat_map(str::chars) {
            if c.is_uppercase() {
                classes.upper.insert(c);
            } else if c.is_lowercase() {
                classes.lower.insert(c);
            }
        }
        classes
    }

    pub fn is_upper(&self, c: char) -> bool {
        self.upper.contains(&c)
    }

    pub fn is_lower(&self, c: char) -> bool {
        self.lower.contains(&c)
    }
}

/// Maps apostrophe-, hyphen- and plus-like glyphs to their ASCII form.
pub fn canonicalize_punctuation(s: &str) -> String {
    s.chars()
        .map(|c| {
            if APOSTROPHES.contains(&c) {
                '\''
            } else if HYPHENS.contains(&c) {
                '-'
            } else if PLUSES.contains(&c) {
                '+'
            } else {
                c
            }
        })
        .collect()
}

/// Collapses whitespace runs into single spaces and trims both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Leading index token of `name`, if there is one.
pub fn index_token<'a>(name: &'a str, index: Option<&Regex>) -> Option<&'a str> {
    index
        .and_then(|re| re.find(name))
        .filter(|m| m.start() == 0 && !m.is_empty())
        .map(|m| m.as_str())
}

/// Canonical split form of a name (or of a query, with the same classes).
pub fn canonical_form(name: &str, index: Option<&Regex>, case: &CaseClasses) -> String {
    let name = canonicalize_punctuation(name);
    let trimmed = name.trim_start();
    let (token, rest) = match index_token(trimmed, index) {
        Some(token) => (token, &trimmed[token.len()..]),
        None => ("", trimmed),
    };

    let mut out = String::with_capacity(name.len() + 4);
    out.push_str(token);
    if !token.is_empty() && rest.chars().next().is_some_and(|c| !c.is_whitespace()) {
        out.push(' ');
    }

    let chars: Vec<char> = rest.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        let after_word = i > 0 && chars[i - 1].is_alphanumeric();
        let starts_word = chars.get(i + 1).is_some_and(|&next| case.is_lower(next));
        if after_word && starts_word && case.is_upper(c) {
            out.push(' ');
        }
        out.push(c);
    }
    collapse_whitespace(&out)
}
