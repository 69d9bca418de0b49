//! Word → tag-alternatives dictionary backed by an in-memory table.

use std::collections::HashMap;

use super::Dictionary;

/// Dictionary keyed by the word exactly as listed. Lowercase keys serve the
/// case-insensitive lookups; capitalized keys ("I", "January") only match
/// case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl WordDictionary {
    /// Build from `(word, alternatives)` pairs. A repeated word keeps its
    /// last listing.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All words whose alternatives include exactly `tag`.
    pub fn words_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(_, alternatives)| alternatives.iter().any(|alt| alt == tag))
            .map(|(word, _)| word.as_str())
    }
}

impl Dictionary for WordDictionary {
    fn alternatives(&self, token: &str) -> Option<&[String]> {
        self.entries.get(token).map(Vec::as_slice)
    }
}
