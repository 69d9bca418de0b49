use serde::Serialize;

use crate::lexicon::TokenMeta;

/// One sentence in flight through the tagger.
///
/// `tokens`, `tags`, `confidence`, `blocked` and `meta` always have the same
/// length. `tags` is filled by initial resolution; once `blocked[i]` is set
/// no later stage writes `tags[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedSequence {
    pub tokens: Vec<String>,
    pub tags: Vec<String>,
    pub confidence: Vec<f64>,
    pub blocked: Vec<bool>,
    pub meta: Vec<TokenMeta>,
    lowered: Vec<String>,
}

impl TaggedSequence {
    /// Metadata is aligned to the tokens: missing records default to empty,
    /// surplus records are dropped.
    pub fn new(tokens: Vec<String>, mut meta: Vec<TokenMeta>) -> Self {
        let len = tokens.len();
        meta.resize_with(len, TokenMeta::default);
        let lowered = tokens.iter().map(|token| token.to_lowercase()).collect();

        Self {
            tokens,
            tags: vec![String::new(); len],
            confidence: vec![0.0; len],
            blocked: vec![false; len],
            meta,
            lowered,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn position(&self, index: usize, offset: isize) -> Option<usize> {
        index
            .checked_add_signed(offset)
            .filter(|&position| position < self.len())
    }

    /// Tag at `index + offset`, `None` outside the sentence.
    pub fn tag_at(&self, index: usize, offset: isize) -> Option<&str> {
        self.position(index, offset)
            .map(|position| self.tags[position].as_str())
            .filter(|tag| !tag.is_empty())
    }

    /// Lowercased token at `index + offset`, `None` outside the sentence.
    pub fn word_at(&self, index: usize, offset: isize) -> Option<&str> {
        self.position(index, offset)
            .map(|position| self.lowered[position].as_str())
    }

    /// Lock a token: later stages leave it alone.
    pub(crate) fn lock(&mut self, index: usize, tag: &str) {
        self.tags[index] = tag.to_string();
        self.confidence[index] = 1.0;
        self.blocked[index] = true;
    }
}

/// Read-only view of the neighbourhood of one token, with absent positions
/// read as the empty string.
#[derive(Clone, Copy)]
pub(crate) struct Window<'s> {
    seq: &'s TaggedSequence,
    index: usize,
}

impl<'s> Window<'s> {
    pub(crate) fn new(seq: &'s TaggedSequence, index: usize) -> Self {
        Self { seq, index }
    }

    /// Current tag of the token under the window.
    pub(crate) fn tag(&self) -> &'s str {
        &self.seq.tags[self.index]
    }

    /// Lowercased token under the window.
    pub(crate) fn word(&self) -> &'s str {
        &self.seq.lowered[self.index]
    }

    /// Token under the window as written.
    pub(crate) fn raw(&self) -> &'s str {
        &self.seq.tokens[self.index]
    }

    pub(crate) fn tag_at(&self, offset: isize) -> &'s str {
        self.seq.tag_at(self.index, offset).unwrap_or("")
    }

    pub(crate) fn word_at(&self, offset: isize) -> &'s str {
        self.seq.word_at(self.index, offset).unwrap_or("")
    }
}

/// Final output of the tagger for one sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagResult {
    pub tokens: Vec<String>,
    pub tags: Vec<String>,
    pub confidence: Vec<f64>,
}

impl From<TaggedSequence> for TagResult {
    fn from(seq: TaggedSequence) -> Self {
        Self {
            tokens: seq.tokens,
            tags: seq.tags,
            confidence: seq.confidence,
        }
    }
}
