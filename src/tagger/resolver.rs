//! Initial tag resolution.
//!
//! Each token is looked up independently through a fixed cascade of
//! lexical providers; the first provider that knows the token decides its
//! tag, confidence and whether later stages may still change it. Tokens no
//! provider knows fall back to `NN` (or `NNS` when they look plural) with
//! zero confidence.

use crate::lexicon::{Lexicon, TokenMeta};

use super::types::TaggedSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    NonLetter,
    DictionarySensitive,
    Contraction,
    GivenNameSensitive,
    CitySensitive,
    DictionaryInsensitive,
    GivenNameInsensitive,
    CityInsensitive,
    Metadata,
    ComplexWord,
    Prefix,
    Suffix,
    Repetition,
    Slang,
    PotentialProper,
}

struct StagePolicy {
    stage: Stage,
    confidence: f64,
    blocked: bool,
}

use Stage::*;

/// Resolution order. First stage returning a tag wins.
const STAGES: &[StagePolicy] = &[
    StagePolicy { stage: NonLetter, confidence: 1.0, blocked: true },
    StagePolicy { stage: DictionarySensitive, confidence: 1.0, blocked: false },
    StagePolicy { stage: Contraction, confidence: 1.0, blocked: true },
    StagePolicy { stage: GivenNameSensitive, confidence: 0.9, blocked: true },
    StagePolicy { stage: CitySensitive, confidence: 0.9, blocked: true },
    StagePolicy { stage: DictionaryInsensitive, confidence: 0.8, blocked: false },
    StagePolicy { stage: GivenNameInsensitive, confidence: 0.8, blocked: true },
    StagePolicy { stage: CityInsensitive, confidence: 0.8, blocked: true },
    StagePolicy { stage: Metadata, confidence: 0.6, blocked: false },
    StagePolicy { stage: ComplexWord, confidence: 0.5, blocked: false },
    StagePolicy { stage: Prefix, confidence: 0.5, blocked: false },
    StagePolicy { stage: Suffix, confidence: 0.5, blocked: false },
    StagePolicy { stage: Repetition, confidence: 0.5, blocked: false },
    StagePolicy { stage: Slang, confidence: 0.5, blocked: false },
    StagePolicy { stage: PotentialProper, confidence: 0.5, blocked: false },
];

impl Stage {
    fn lookup<'a>(self, lexicon: &'a Lexicon, token: &'a str, meta: &'a TokenMeta) -> Option<&'a str> {
        match self {
            NonLetter => lexicon.non_letters.classify(token),
            DictionarySensitive => lexicon.dictionary.lookup(token, true),
            Contraction => lexicon.contractions.classify(token),
            GivenNameSensitive => lexicon.given_names.classify(token, true),
            CitySensitive => lexicon.cities.classify(token, true),
            DictionaryInsensitive => lexicon.dictionary.lookup(token, false),
            GivenNameInsensitive => lexicon.given_names.classify(token, false),
            CityInsensitive => lexicon.cities.classify(token, false),
            Metadata => meta.resolve_tag(),
            ComplexWord => lexicon.complex_words.classify(token),
            Prefix => lexicon.prefixes.classify(token),
            Suffix => lexicon.suffixes.classify(token),
            Repetition => lexicon.repetitive.classify(token),
            Slang => lexicon.slang.classify(token),
            PotentialProper => lexicon.potential_proper.classify(token),
        }
    }
}

/// Tag, confidence and lock state chosen for one token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Resolution {
    pub(crate) tag: String,
    pub(crate) confidence: f64,
    pub(crate) blocked: bool,
}

pub(crate) fn resolve_token(lexicon: &Lexicon, token: &str, meta: &TokenMeta) -> Resolution {
    for policy in STAGES {
        if let Some(tag) = policy.stage.lookup(lexicon, token, meta) {
            return Resolution {
                tag: tag.to_string(),
                confidence: policy.confidence,
                blocked: policy.blocked,
            };
        }
    }

    let tag = if lexicon.inflector.is_plural(token) { "NNS" } else { "NN" };
    Resolution {
        tag: tag.to_string(),
        confidence: 0.0,
        blocked: false,
    }
}

/// Fill `tags`, `confidence` and `blocked` for every token.
pub(crate) fn resolve(seq: &mut TaggedSequence, lexicon: &Lexicon) {
    for index in 0..seq.len() {
        let resolution = resolve_token(lexicon, &seq.tokens[index], &seq.meta[index]);
        seq.tags[index] = resolution.tag;
        seq.confidence[index] = resolution.confidence;
        seq.blocked[index] = resolution.blocked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_one(token: &str) -> Resolution {
        resolve_token(&Lexicon::embedded(), token, &TokenMeta::default())
    }

    fn assert_resolution(token: &str, tag: &str, confidence: f64, blocked: bool) {
        let resolution = resolve_one(token);
        assert_eq!(
            resolution,
            Resolution {
                tag: tag.to_string(),
                confidence,
                blocked
            },
            "token {:?}",
            token
        );
    }

    #[test]
    fn test_non_letters_are_locked() {
        assert_resolution("12/25/2020", "CD", 1.0, true);
        assert_resolution(",", ",", 1.0, true);
    }

    #[test]
    fn test_dictionary_stages() {
        assert_resolution("the", "DT", 1.0, false);
        assert_resolution("The", "DT", 0.8, false);
        assert_resolution("I", "PRP", 1.0, false);
    }

    #[test]
    fn test_contractions_are_locked() {
        assert_resolution("n't", "RB", 1.0, true);
        assert_resolution("'s", "POS", 1.0, true);
    }

    #[test]
    fn test_names_and_cities() {
        assert_resolution("John", "NNP", 0.9, true);
        assert_resolution("Paris", "NNP", 0.9, true);
        assert_resolution("JOHN", "NNP", 0.8, true);
        assert_resolution("paris", "NNP", 0.8, true);
    }

    #[test]
    fn test_metadata_stage() {
        let meta = TokenMeta {
            time_indicator: true,
            ..TokenMeta::default()
        };
        let resolution = resolve_token(&Lexicon::embedded(), "GMT", &meta);
        assert_eq!(resolution.tag, "RB");
        assert_eq!(resolution.confidence, 0.6);
        assert!(!resolution.blocked);
    }

    #[test]
    fn test_shape_stages() {
        assert_resolution("twenty-five", "CD", 0.5, false);
        assert_resolution("unbelievable", "JJ", 0.5, false);
        assert_resolution("quickly", "RB", 0.5, false);
        assert_resolution("sooo", "UH", 0.5, false);
        assert_resolution("lol", "UH", 0.5, false);
        assert_resolution("Zanzibar", "NNP", 0.5, false);
    }

    #[test]
    fn test_default_fallback() {
        assert_resolution("blorft", "NN", 0.0, false);
        assert_resolution("blorfts", "NNS", 0.0, false);
        assert_resolution("", "NN", 0.0, false);
    }

    #[test]
    fn test_resolve_fills_sequence() {
        let mut seq = TaggedSequence::new(
            ["The", "dog", "."].iter().map(|t| t.to_string()).collect(),
            vec![],
        );
        resolve(&mut seq, &Lexicon::embedded());
        assert_eq!(seq.tags, vec!["DT", "NN", "."]);
        assert_eq!(seq.confidence, vec![0.8, 1.0, 1.0]);
        assert_eq!(seq.blocked, vec![false, false, true]);
    }
}
