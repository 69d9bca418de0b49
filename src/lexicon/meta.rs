//! Per-token metadata supplied by the tokenizer.

use serde::{Deserialize, Serialize};

/// Markers a tokenizer may attach to a token. Every field is optional in
/// the serialized form; an absent record means "nothing detected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenMeta {
    /// Explicit tag chosen by the tokenizer; wins over every marker.
    pub pos: Option<String>,
    /// "1990-1995"
    pub yearly_range: bool,
    /// "10:30pm"
    pub time: bool,
    /// "3:1"
    pub ratio: bool,
    /// "a.m.", "GMT"
    pub time_indicator: bool,
    /// "1st", "22nd"
    pub order: bool,
    /// "twenty-first"
    pub hyphened_order: bool,
    /// "1.5k", "10^6"
    pub number: bool,
    pub abbrev: bool,
    pub proper_noun: bool,
    pub acronym: bool,
}

impl TokenMeta {
    /// Tag implied by the metadata, if any.
    pub fn resolve_tag(&self) -> Option<&str> {
        if let Some(pos) = self.pos.as_deref().filter(|pos| !pos.is_empty()) {
            return Some(pos);
        }
        if self.yearly_range || self.time || self.ratio || self.number {
            return Some("CD");
        }
        if self.time_indicator {
            return Some("RB");
        }
        if self.order || self.hyphened_order {
            return Some("JJ");
        }
        if self.abbrev || self.acronym || self.proper_noun {
            return Some("NNP");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_meta_resolves_nothing() {
        assert_eq!(TokenMeta::default().resolve_tag(), None);
    }

    #[test]
    fn test_explicit_pos_wins() {
        let meta = TokenMeta {
            pos: Some("FW".to_string()),
            number: true,
            ..TokenMeta::default()
        };
        assert_eq!(meta.resolve_tag(), Some("FW"));
    }

    #[test]
    fn test_markers() {
        let number = TokenMeta {
            yearly_range: true,
            ..TokenMeta::default()
        };
        assert_eq!(number.resolve_tag(), Some("CD"));

        let ordinal = TokenMeta {
            order: true,
            ..TokenMeta::default()
        };
        assert_eq!(ordinal.resolve_tag(), Some("JJ"));

        let acronym = TokenMeta {
            acronym: true,
            ..TokenMeta::default()
        };
        assert_eq!(acronym.resolve_tag(), Some("NNP"));
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let meta: TokenMeta = serde_json::from_str(r#"{"yearlyRange": true}"#).unwrap();
        assert!(meta.yearly_range);
        assert!(!meta.acronym);
        assert_eq!(meta.pos, None);
    }
}
