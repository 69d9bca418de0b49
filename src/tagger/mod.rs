//! Two-phase part-of-speech tagger.
//!
//! Initial resolution gives every token a first-guess tag from the lexicon.
//! Smoothing then refines the unblocked tags in three stages: pre-rule
//! heuristics, two passes of the contextual rule table, and post-rule
//! heuristics.
//!
//! ```
//! use lexitag::Tagger;
//!
//! let tagger = Tagger::with_defaults();
//! let result = tagger.tag(&["The", "dog", "runs", "."], Vec::new());
//! assert_eq!(result.tags, vec!["DT", "NN", "VBZ", "."]);
//! ```

mod engine;
mod post_rules;
mod pre_rules;
mod resolver;
mod rules;
mod types;

use std::sync::Arc;

use crate::lexicon::{Lexicon, TokenMeta};

pub use engine::Pass;
pub use rules::{ConditionKind, ContextRule, default_rules, load_rules, parse_rules};
pub use types::{TagResult, TaggedSequence};

/// Tags pre-tokenized sentences. Cheap to clone; the lexicon and rule table
/// are shared.
#[derive(Clone)]
pub struct Tagger {
    lexicon: Arc<Lexicon>,
    rules: Arc<[ContextRule]>,
}

impl Tagger {
    pub fn new(lexicon: Arc<Lexicon>, rules: Arc<[ContextRule]>) -> Self {
        Self { lexicon, rules }
    }

    /// Tagger over the compiled-in lexicon and rule table.
    pub fn with_defaults() -> Self {
        Self::new(Lexicon::embedded(), default_rules())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn rules(&self) -> &[ContextRule] {
        &self.rules
    }

    /// Run the initial resolver only.
    pub fn resolve_initial<S: AsRef<str>>(&self, tokens: &[S], meta: Vec<TokenMeta>) -> TaggedSequence {
        let tokens = tokens.iter().map(|token| token.as_ref().to_string()).collect();
        let mut seq = TaggedSequence::new(tokens, meta);
        resolver::resolve(&mut seq, &self.lexicon);
        seq
    }

    /// Run the smoothing stages over an initially resolved sequence.
    pub fn smooth(&self, seq: &mut TaggedSequence) {
        pre_rules::apply(seq, &self.lexicon);
        engine::apply_rules(seq, Pass::First, &self.rules, &*self.lexicon.dictionary);
        engine::apply_rules(seq, Pass::Second, &self.rules, &*self.lexicon.dictionary);
        post_rules::apply(seq, &self.lexicon);
    }

    /// Tag one sentence. `meta` may be shorter than `tokens`; missing
    /// records count as empty.
    pub fn tag<S: AsRef<str>>(&self, tokens: &[S], meta: Vec<TokenMeta>) -> TagResult {
        let mut seq = self.resolve_initial(tokens, meta);
        self.smooth(&mut seq);
        seq.into()
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Tag one sentence with the compiled-in lexicon and rules.
pub fn tag<S: AsRef<str>>(tokens: &[S], meta: Vec<TokenMeta>) -> TagResult {
    Tagger::with_defaults().tag(tokens, meta)
}
