//! Capitalization-based "potential proper noun" heuristic.

use std::sync::LazyLock;

use regex::Regex;

use super::TokenClassifier;

/// Capitalized words (with optional possessive), mixed-case names
/// ("McDonald"), hyphenated names, all-caps acronyms and dotted initials.
static POTENTIAL_PROPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Z][a-z]+(['\u{2019}]s)?|[A-Z][a-z]*[A-Z][a-z]+|[A-Z][a-z]+(-[A-Z][a-z]+)+|[A-Z]{2,}s?|([A-Z]\.)+)$",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct PotentialProper;

impl TokenClassifier for PotentialProper {
    fn classify(&self, token: &str) -> Option<&str> {
        POTENTIAL_PROPER.is_match(token).then_some("NNP")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_words() {
        let p = PotentialProper;
        assert_eq!(p.classify("Zanzibar"), Some("NNP"));
        assert_eq!(p.classify("Zorg's"), Some("NNP"));
        assert_eq!(p.classify("McAllister"), Some("NNP"));
        assert_eq!(p.classify("Jean-Luc"), Some("NNP"));
    }

    #[test]
    fn test_acronyms_and_initials() {
        let p = PotentialProper;
        assert_eq!(p.classify("NASA"), Some("NNP"));
        assert_eq!(p.classify("CEOs"), Some("NNP"));
        assert_eq!(p.classify("J.R."), Some("NNP"));
    }

    #[test]
    fn test_lowercase_is_not_proper() {
        let p = PotentialProper;
        assert_eq!(p.classify("zanzibar"), None);
        assert_eq!(p.classify("A"), None);
        assert_eq!(p.classify(""), None);
    }
}
