//! Complex (hyphenated / compound) word classifier.

use super::TokenClassifier;
use super::tables::WordTable;

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety", "hundred",
    "thousand",
];

/// Known compounds from a table, then a shape heuristic for hyphenated
/// tokens the table does not list.
#[derive(Debug, Clone, Default)]
pub struct ComplexWords {
    table: WordTable,
}

impl ComplexWords {
    pub fn new(table: WordTable) -> Self {
        Self { table }
    }
}

impl TokenClassifier for ComplexWords {
    fn classify(&self, token: &str) -> Option<&str> {
        if let Some(tag) = self.table.get(token) {
            return Some(tag);
        }
        classify_hyphenated(token)
    }
}

fn classify_hyphenated(token: &str) -> Option<&'static str> {
    let lower = token.to_lowercase();
    let parts: Vec<&str> = lower.split('-').collect();
    if parts.len() < 2
        || parts
            .iter()
            .any(|part| part.is_empty() || !part.chars().all(char::is_alphanumeric))
    {
        return None;
    }

    if parts.iter().all(|part| NUMBER_WORDS.contains(part)) {
        return Some("CD");
    }

    let last = parts[parts.len() - 1];
    if last.len() > 3 && last.ends_with('s') && !last.ends_with("ss") {
        return Some("NNS");
    }

    Some("JJ")
}
