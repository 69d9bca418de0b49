//! Contextual rule engine.
//!
//! For every unblocked token the whole rule table is scanned once per pass.
//! A rule is considered when its `from` equals the token's tag *at that
//! moment*, so a rewrite earlier in the scan can enable later rules for the
//! same token. A scan rewrites a token at most once per rule.

use log::trace;

use crate::lexicon::Dictionary;

use super::rules::{ConditionKind, ContextRule};
use super::types::TaggedSequence;

/// Which of the two sweeps is running. Rules marked `second_run` are
/// skipped during the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    First,
    Second,
}

pub(crate) fn apply_rules(
    seq: &mut TaggedSequence,
    pass: Pass,
    rules: &[ContextRule],
    dictionary: &dyn Dictionary,
) {
    for index in 0..seq.len() {
        if seq.blocked[index] {
            continue;
        }
        for rule in rules {
            if rule.from != seq.tags[index] || (rule.second_run && pass == Pass::First) {
                continue;
            }
            if condition_holds(rule, seq, index, dictionary) {
                trace!(
                    "{:?} {} -> {} at {} ({:?}) by {}",
                    pass, rule.from, rule.to, index, seq.tokens[index], rule.kind
                );
                seq.tags[index] = rule.to.clone();
            }
        }
    }
}

/// Both sides present and equal.
fn is(actual: Option<&str>, expected: Option<&str>) -> bool {
    matches!((actual, expected), (Some(a), Some(b)) if a == b)
}

fn condition_holds(
    rule: &ContextRule,
    seq: &TaggedSequence,
    index: usize,
    dictionary: &dyn Dictionary,
) -> bool {
    use ConditionKind::*;

    let tag = |offset: isize| seq.tag_at(index, offset);
    let word = |offset: isize| seq.word_at(index, offset);
    let (c1, c2, c3) = (rule.c1.as_deref(), rule.c2.as_deref(), rule.c3.as_deref());

    let verify = || verified(rule, seq.word_at(index, 0).unwrap_or_default(), dictionary);

    match rule.kind {
        // compared and verified with the token as written
        StartWord => {
            let token = seq.tokens[index].as_str();
            index == 0 && is(Some(token), c1) && verified(rule, token, dictionary)
        }
        End => tag(1).is_none() && verify(),
        CurrentWd => is(word(0), c1) && verify(),
        CurrentWdRgx => {
            rule.pattern
                .as_ref()
                .zip(word(0))
                .is_some_and(|(pattern, word)| pattern.is_match(word))
                && verify()
        }
        WdNextWd => is(word(0), c1) && is(word(1), c2) && verify(),
        WdPrevWd => is(word(-1), c1) && is(word(0), c2) && verify(),
        PrevWord => is(word(-1), c1) && verify(),
        Prev2Wd => is(word(-2), c1) && verify(),
        Prev2Words => is(word(-1), c1) && is(word(-2), c2) && verify(),
        NextWd => is(word(1), c1) && verify(),
        Next2Wd => is(word(2), c1) && verify(),
        Prev1Or2Wd => is(word(-1), c1) || (is(word(-2), c1) && verify()),
        Next1Or2Wd => is(word(1), c1) || (is(word(2), c1) && verify()),
        PrevTag => index > 0 && is(tag(-1), c1) && verify(),
        PrevTag2 => is(tag(-2), c1) && verify(),
        Prev2Tag => is(tag(-2), c1) && is(tag(-1), c2) && verify(),
        Prev2TagNextTag => is(tag(-2), c1) && is(tag(-1), c2) && is(tag(1), c3) && verify(),
        Prev1Or2Tag => is(tag(-1), c1) || (is(tag(-2), c1) && verify()),
        Prev1Or2Or3Tag => is(tag(-1), c1) || is(tag(-2), c1) || (is(tag(-3), c1) && verify()),
        NextTag => is(tag(1), c1) && verify(),
        NextTag2 => is(tag(2), c1) && verify(),
        Next2Tag => is(tag(1), c1) && is(tag(2), c2),
        Next1Or2Tag => is(tag(1), c1) || (is(tag(2), c1) && verify()),
        Next1Or2Or3Tag => is(tag(1), c1) || is(tag(2), c1) || (is(tag(3), c1) && verify()),
        SurroundTag => is(tag(-1), c1) && is(tag(1), c2) && verify(),
        SurroundTagWd => is(word(0), c1) && is(tag(-1), c2) && is(tag(1), c3) && verify(),
        WdPrevTag => is(word(0), c2) && is(tag(-1), c1) && verify(),
        WdNextTag => is(word(0), c1) && is(tag(1), c2) && verify(),
        PrevWordPrevTag => is(word(-1), c1) && is(tag(-1), c2) && verify(),
    }
}

/// A `+verify` rule may only produce a tag the dictionary allows for the
/// token. Unknown tokens allow anything.
fn verified(rule: &ContextRule, key: &str, dictionary: &dyn Dictionary) -> bool {
    !rule.verify || !dictionary.is_known(key) || dictionary.has_alternative(key, &rule.to)
}
