//! Exact-match shortcuts: index tokens and unique initials

use std::collections::HashMap;

use super::fold::fold;

/// Alias strings mapped to entry positions.
///
/// Every key is lowercase. An alias that would name more than one entry is
/// left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    lookup: HashMap<String, usize>,
    by_entry: Vec<Vec<String>>,
}

impl AliasTable {
    /// Builds the table from per-entry index tokens and folded names.
    ///
    /// `keys` are the folded lowercase canonical forms; the initial of an
    /// entry is the first alphabetic character after its index token.
    pub fn build(index_tokens: &[Option<String>], keys: &[String]) -> Self {
        let mut table = Self {
            lookup: HashMap::new(),
            by_entry: vec![Vec::new(); keys.len()],
        };

        let tokens = index_tokens
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.as_deref().map(|t| (token_key(t), i)));
        table.insert_unique(tokens);

        let initials = keys
            .iter()
            .zip(index_tokens)
            .enumerate()
            .filter_map(|(i, (key, token))| {
                initial(key, token.as_deref()).map(|c| (c.to_string(), i))
            });
        table.insert_unique(initials);

        table
    }

    /// Adds every alias that occurs for exactly one entry and is not taken yet.
    fn insert_unique(&mut self, aliases: impl Iterator<Item = (String, usize)>) {
        let mut seen: HashMap<String, Option<usize>> = HashMap::new();
        for (alias, entry) in aliases {
            seen.entry(alias)
                .and_modify(|e| *e = None)
                .or_insert(Some(entry));
        }
        for (alias, entry) in seen {
            if let Some(entry) = entry {
                if !self.lookup.contains_key(&alias) {
                    self.by_entry[entry].push(alias.clone());
                    self.lookup.insert(alias, entry);
                }
            }
        }
    }

    pub fn get(&self, alias: &str) -> Option<usize> {
        self.lookup.get(alias).copied()
    }

    /// Aliases pointing at `entry`.
    pub fn aliases_of(&self, entry: usize) -> &[String] {
        self.by_entry.get(entry).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

/// Index tokens are matched the way queries are: folded and lowercase.
fn token_key(token: &str) -> String {
    fold(token).to_lowercase()
}

/// Initial-letter alias of a folded lowercase name. "black" answers to `k`.
fn initial(key: &str, token: Option<&str>) -> Option<char> {
    let folded;
    let rest = match token {
        Some(t) => {
            folded = token_key(t);
            key.strip_prefix(folded.as_str()).unwrap_or(key)
        }
        None => key,
    };
    if rest.trim() == "black" {
        return Some('k');
    }
    rest.chars().find(|c| c.is_alphabetic())
}
