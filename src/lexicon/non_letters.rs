//! Classifier for tokens without any letter: numbers, punctuation, symbols.

use std::sync::LazyLock;

use regex::Regex;

use super::TokenClassifier;

/// Numbers, numeric dates and times, ratios, percentages: `12`, `3.14`,
/// `1,000`, `12/25/2020`, `10:30`, `'99`, `-5`, `40%`.
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?'?\d+([.,:/\-]\d+)*%?$").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct NonLetterClassifier;

impl TokenClassifier for NonLetterClassifier {
    fn classify(&self, token: &str) -> Option<&str> {
        if token.is_empty() || token.chars().any(char::is_alphabetic) {
            return None;
        }

        if NUMERIC.is_match(token) {
            return Some("CD");
        }

        let tag = match token {
            "." | "!" | "?" | "?!" | "!!" | "!?" => ".",
            "," => ",",
            ":" | ";" | "-" | "--" | "..." | "\u{2026}" | "\u{2013}" | "\u{2014}" => ":",
            "(" | "[" | "{" => "(",
            ")" | "]" | "}" => ")",
            "\"" | "``" | "''" | "\u{201c}" | "\u{201d}" => "\"",
            "'" | "`" | "\u{2018}" | "\u{2019}" => "'",
            "$" | "\u{20ac}" | "\u{a3}" | "\u{a5}" => "$",
            "#" => "#",
            _ => "SYM",
        };
        Some(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_are_not_classified() {
        let c = NonLetterClassifier;
        assert_eq!(c.classify("dog"), None);
        assert_eq!(c.classify("1st"), None);
        assert_eq!(c.classify("n't"), None);
        assert_eq!(c.classify(""), None);
    }

    #[test]
    fn test_numbers() {
        let c = NonLetterClassifier;
        assert_eq!(c.classify("12"), Some("CD"));
        assert_eq!(c.classify("12/25/2020"), Some("CD"));
        assert_eq!(c.classify("'99"), Some("CD"));
        assert_eq!(c.classify("3.14"), Some("CD"));
        assert_eq!(c.classify("1,000,000"), Some("CD"));
        assert_eq!(c.classify("10:30"), Some("CD"));
        assert_eq!(c.classify("40%"), Some("CD"));
    }

    #[test]
    fn test_punctuation() {
        let c = NonLetterClassifier;
        assert_eq!(c.classify("."), Some("."));
        assert_eq!(c.classify("?"), Some("."));
        assert_eq!(c.classify(","), Some(","));
        assert_eq!(c.classify(";"), Some(":"));
        assert_eq!(c.classify("..."), Some(":"));
        assert_eq!(c.classify("("), Some("("));
        assert_eq!(c.classify("]"), Some(")"));
        assert_eq!(c.classify("\""), Some("\""));
        assert_eq!(c.classify("'"), Some("'"));
        assert_eq!(c.classify("$"), Some("$"));
    }

    #[test]
    fn test_other_symbols() {
        let c = NonLetterClassifier;
        assert_eq!(c.classify("&"), Some("SYM"));
        assert_eq!(c.classify("+"), Some("SYM"));
        assert_eq!(c.classify("=>"), Some("SYM"));
    }
}
