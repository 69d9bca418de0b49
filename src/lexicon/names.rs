//! Given-name and city classifiers.

use std::collections::HashSet;

use super::{NameClassifier, capitalize};

const PROPER_NOUN: &str = "NNP";

/// A set of capitalized names. Case-sensitive lookups require the exact
/// listed form; case-insensitive lookups capitalize the token first.
#[derive(Debug, Clone, Default)]
pub struct NameList {
    names: HashSet<String>,
}

impl NameList {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameClassifier for NameList {
    fn classify(&self, token: &str, case_sensitive: bool) -> Option<&str> {
        let found = if case_sensitive {
            self.names.contains(token)
        } else {
            self.names.contains(&capitalize(token))
        };
        found.then_some(PROPER_NOUN)
    }
}
