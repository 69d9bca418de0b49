//! Flat token → tag tables (contractions, slang).

use std::collections::HashMap;

use super::TokenClassifier;

/// Lowercase token → single tag. Entries listing several tags keep the
/// first one.
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    entries: HashMap<String, String>,
}

impl WordTable {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(word, tags)| {
                let tag = tags.into_iter().next()?;
                Some((word.to_lowercase(), tag))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(&token.to_lowercase()).map(String::as_str)
    }
}

impl TokenClassifier for WordTable {
    fn classify(&self, token: &str) -> Option<&str> {
        self.get(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = WordTable::from_entries(vec![
            ("n't".to_string(), vec!["RB".to_string()]),
            ("Gonna".to_string(), vec!["VBG".to_string(), "MD".to_string()]),
        ]);
        assert_eq!(table.classify("n't"), Some("RB"));
        assert_eq!(table.classify("N'T"), Some("RB"));
        assert_eq!(table.classify("gonna"), Some("VBG"));
        assert_eq!(table.classify("wanna"), None);
        assert_eq!(table.len(), 2);
    }
}
