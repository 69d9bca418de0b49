//! Batch driver: read a corpus of pre-tokenized sentences and tag it.

mod process;
mod read;

use serde::Deserialize;

use crate::lexicon::TokenMeta;
use crate::models::TaggedSentence;

/// One input sentence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sentence {
    /// 1-based line of the input file the sentence came from.
    #[serde(skip)]
    pub line: usize,
    pub tokens: Vec<String>,
    #[serde(default)]
    pub meta: Vec<TokenMeta>,
}

/// Sentences read from an input file, plus the lines that could not be read.
#[derive(Debug, Default)]
pub struct Corpus {
    pub sentences: Vec<Sentence>,
    pub errors: Vec<String>,
}

impl Corpus {
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|sentence| sentence.tokens.len()).sum()
    }
}

pub struct ProcessResult {
    pub sentences: Vec<TaggedSentence>,
    pub errors: Vec<String>,
}

pub use self::process::process;
pub use self::read::{InputFormat, read_corpus};
