//! Lexical data providers consulted by the tagger.
//!
//! Every source of word knowledge (the dictionary, name lists, affix tables,
//! the inflection utility) sits behind a narrow read-only trait so a data
//! source can be swapped without touching the tagging logic. [`Lexicon`]
//! bundles one implementation of each; the default bundle is built from the
//! resources compiled into the crate.
//!
//! All lookups are pure: "not found" is `None`, never an error.

mod affixes;
mod complex;
mod dictionary;
mod inflection;
mod loader;
mod meta;
mod names;
mod non_letters;
mod proper;
mod repetitive;
mod tables;

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use anyhow::Result;
use log::debug;

pub use affixes::AffixClassifier;
pub use complex::ComplexWords;
pub use dictionary::WordDictionary;
pub use inflection::{Morphology, VerbForm};
pub use meta::TokenMeta;
pub use names::NameList;
pub use non_letters::NonLetterClassifier;
pub use proper::PotentialProper;
pub use repetitive::RepetitionDetector;
pub use tables::WordTable;

/// Word → tag-alternatives dictionary.
pub trait Dictionary: Send + Sync {
    /// Tag alternatives recorded for exactly this key, primary tag first.
    fn alternatives(&self, token: &str) -> Option<&[String]>;

    /// Primary tag of a token. The case-insensitive form looks up the
    /// lowercased token.
    fn lookup(&self, token: &str, case_sensitive: bool) -> Option<&str> {
        let alternatives = if case_sensitive {
            self.alternatives(token)
        } else {
            self.alternatives(&token.to_lowercase())
        };
        alternatives
            .and_then(|alternatives| alternatives.first())
            .map(String::as_str)
    }

    /// Whether the dictionary has an entry for this exact key.
    fn is_known(&self, token: &str) -> bool {
        self.alternatives(token).is_some()
    }

    /// Whether any alternative of the token belongs to a tag family, i.e.
    /// starts with `family` (`"VB"` matches `VBD`, `VBN`, ...).
    fn lists(&self, token: &str, family: &str) -> bool {
        self.alternatives(token)
            .is_some_and(|alternatives| alternatives.iter().any(|alt| alt.starts_with(family)))
    }

    /// Whether `tag` is exactly one of the token's alternatives.
    fn has_alternative(&self, token: &str, tag: &str) -> bool {
        self.alternatives(token)
            .is_some_and(|alternatives| alternatives.iter().any(|alt| alt == tag))
    }
}

/// Single-token classifier returning a tag or nothing.
pub trait TokenClassifier: Send + Sync {
    fn classify(&self, token: &str) -> Option<&str>;
}

/// Name-list classifier with an explicit case-sensitivity switch.
pub trait NameClassifier: Send + Sync {
    fn classify(&self, token: &str, case_sensitive: bool) -> Option<&str>;
}

/// Morphology queries used by the default fallback and the heuristics.
pub trait Inflector: Send + Sync {
    fn is_plural(&self, token: &str) -> bool;

    /// Inflect a verb form into `form`, e.g. `("went", VerbForm::Vbp)` → `"go"`.
    fn conjugate(&self, token: &str, form: VerbForm) -> String;

    fn is_known_infinitive(&self, token: &str) -> bool;
}

/// One implementation of every lexical provider the tagger consults.
pub struct Lexicon {
    pub dictionary: Box<dyn Dictionary>,
    pub non_letters: Box<dyn TokenClassifier>,
    pub contractions: Box<dyn TokenClassifier>,
    pub given_names: Box<dyn NameClassifier>,
    pub cities: Box<dyn NameClassifier>,
    pub complex_words: Box<dyn TokenClassifier>,
    pub prefixes: Box<dyn TokenClassifier>,
    pub suffixes: Box<dyn TokenClassifier>,
    pub repetitive: Box<dyn TokenClassifier>,
    pub slang: Box<dyn TokenClassifier>,
    pub potential_proper: Box<dyn TokenClassifier>,
    pub inflector: Box<dyn Inflector>,
    /// Words ending in `-ing` that are never gerunds ("thing", "during").
    pub ing_exceptions: HashSet<String>,
}

static EMBEDDED_LEXICON: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    let sources = loader::LexiconSources::embedded();
    Arc::new(Lexicon::from_sources(&sources))
});

impl Lexicon {
    /// The default lexicon built from the compiled-in resources. Built once
    /// per process and shared.
    pub fn embedded() -> Arc<Lexicon> {
        Arc::clone(&EMBEDDED_LEXICON)
    }

    /// Build a lexicon from a resource directory on disk. Files missing from
    /// the directory fall back to the compiled-in copies.
    pub fn from_dir(dir: &Path) -> Result<Lexicon> {
        let sources = loader::LexiconSources::from_dir(dir)?;
        Ok(Lexicon::from_sources(&sources))
    }

    fn from_sources(sources: &loader::LexiconSources) -> Lexicon {
        let dictionary = WordDictionary::from_entries(loader::parse_tag_entries(
            &sources.dictionary,
            loader::DICTIONARY_FILE,
        ));
        let inflector = Morphology::from_dictionary(&dictionary);
        let ing_exceptions = loader::parse_word_list(&sources.ing_exceptions)
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();

        debug!(
            "Lexicon loaded: {} dictionary entries, {} known infinitives",
            dictionary.len(),
            inflector.infinitive_count()
        );

        Lexicon {
            dictionary: Box::new(dictionary),
            non_letters: Box::new(NonLetterClassifier),
            contractions: Box::new(WordTable::from_entries(loader::parse_tag_entries(
                &sources.contractions,
                loader::CONTRACTIONS_FILE,
            ))),
            given_names: Box::new(NameList::new(loader::parse_word_list(
                &sources.given_names,
            ))),
            cities: Box::new(NameList::new(loader::parse_word_list(&sources.cities))),
            complex_words: Box::new(ComplexWords::new(WordTable::from_entries(
                loader::parse_tag_entries(&sources.complex_words, loader::COMPLEX_WORDS_FILE),
            ))),
            prefixes: Box::new(AffixClassifier::prefixes()),
            suffixes: Box::new(AffixClassifier::suffixes()),
            repetitive: Box::new(RepetitionDetector),
            slang: Box::new(WordTable::from_entries(loader::parse_tag_entries(
                &sources.slang,
                loader::SLANG_FILE,
            ))),
            potential_proper: Box::new(PotentialProper),
            inflector: Box::new(inflector),
            ing_exceptions,
        }
    }
}

/// Capitalize a token the way name lists are keyed: first character upper
/// case, the rest lower case.
pub(crate) fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("paris"), "Paris");
        assert_eq!(capitalize("LONDON"), "London");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élise"), "Élise");
    }

    #[test]
    fn test_embedded_lexicon_is_shared() {
        let first = Lexicon::embedded();
        let second = Lexicon::embedded();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_dictionary_lookup_case_sensitivity() {
        let lexicon = Lexicon::embedded();
        assert_eq!(lexicon.dictionary.lookup("the", true), Some("DT"));
        assert_eq!(lexicon.dictionary.lookup("The", true), None);
        assert_eq!(lexicon.dictionary.lookup("The", false), Some("DT"));
        assert_eq!(lexicon.dictionary.lookup("I", true), Some("PRP"));
    }

    #[test]
    fn test_dictionary_family_and_exact_alternatives() {
        let lexicon = Lexicon::embedded();
        assert!(lexicon.dictionary.lists("had", "VB"));
        assert!(lexicon.dictionary.lists("had", "VBN"));
        assert!(lexicon.dictionary.has_alternative("had", "VBD"));
        assert!(!lexicon.dictionary.has_alternative("had", "VB"));
        assert!(!lexicon.dictionary.lists("qwzx", "NN"));
    }

    #[test]
    fn test_ing_exceptions_loaded() {
        let lexicon = Lexicon::embedded();
        assert!(lexicon.ing_exceptions.contains("thing"));
        assert!(lexicon.ing_exceptions.contains("during"));
    }
}
