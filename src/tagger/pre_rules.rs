//! Heuristic corrections applied before the rule cascade.
//!
//! One left-to-right sweep over unblocked tokens. Conditions are tried in
//! order and the first one that matches decides the token for this sweep.
//! Numerals, scale words, a sentence-initial "that" and an infinitive after
//! "to" are locked so neither the rules nor the post-rule heuristics can
//! change them again.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::Lexicon;

use super::types::{TaggedSequence, Window};

static NUMERAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^('?)\d+(-|/|:)?(\d+)?$").unwrap());

static SCALE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(m|b|tr|tri|quadr|quint|sext|sept|oct|non|dec|undec|duodec|tredec|quattuordec|quindec|sexdec|sedec|septendec)illions?$",
    )
    .unwrap()
});

const SCALE_WORDS: &[&str] = &["hundred", "hundreds", "thousand", "thousands"];

static CAPITALIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+").unwrap());

static REGULAR_PARTICIPLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^e]ed$").unwrap());

/// Tag chains that turn a `VBD` into a participle, read backwards from the
/// previous token.
const PARTICIPLE_CHAINS: &[&[&str]] = &[
    &["PRP", "WP", "IN", "JJR"],
    &["WP", "IN", "JJR"],
    &["IN", "JJR"],
    &["JJR"],
];

#[derive(Debug, Clone, PartialEq)]
enum Correction {
    Retag(String),
    /// Retag with full confidence and block the token.
    Lock(&'static str),
}

pub(crate) fn apply(seq: &mut TaggedSequence, lexicon: &Lexicon) {
    for index in 0..seq.len() {
        if seq.blocked[index] {
            continue;
        }
        match decide(Window::new(seq, index), lexicon) {
            Some(Correction::Lock(tag)) => seq.lock(index, tag),
            Some(Correction::Retag(tag)) => seq.tags[index] = tag,
            None => {}
        }
    }
}

fn decide(w: Window<'_>, lexicon: &Lexicon) -> Option<Correction> {
    let dictionary = &lexicon.dictionary;
    let token = w.word();
    let tag = w.tag();
    let prev_tag = w.tag_at(-1);
    let next_tag = w.tag_at(1);
    let length = token.chars().count();
    let capitalized = CAPITALIZED.is_match(w.raw());

    if NUMERAL.is_match(token) {
        return Some(Correction::Lock("CD"));
    }

    if SCALE_WORDS.contains(&token) || SCALE_WORD.is_match(token) {
        return Some(Correction::Lock("NNS"));
    }

    if prev_tag.is_empty() && token == "that" {
        return Some(Correction::Lock("DT"));
    }

    if prev_tag == "TO" && lexicon.inflector.is_known_infinitive(token) {
        return Some(Correction::Lock("VB"));
    }

    if tag == "NN" && !dictionary.is_known(token) && lexicon.inflector.is_plural(token) {
        return Some(Correction::Retag("NNS".to_string()));
    }

    if tag == "JJ" && next_tag == "DT" && dictionary.lists(token, "VB") {
        let verb = dictionary
            .alternatives(token)
            .and_then(|alternatives| alternatives.iter().find(|alt| alt.starts_with('V')));
        if let Some(verb) = verb {
            return Some(Correction::Retag(verb.clone()));
        }
    }

    if tag == "VBD"
        && ["PRP", "WP", "IN", "JJR"].contains(&prev_tag)
        && dictionary.lists(token, "VBN")
        && PARTICIPLE_CHAINS.iter().any(|chain| {
            chain
                .iter()
                .enumerate()
                .all(|(back, expected)| w.tag_at(-(back as isize) - 1) == *expected)
        })
    {
        return Some(Correction::Retag("VBN".to_string()));
    }

    if length > 3
        && !dictionary.is_known(token)
        && !prev_tag.is_empty()
        && !token.contains('-')
        && !capitalized
        && REGULAR_PARTICIPLE.is_match(token)
    {
        return Some(Correction::Retag("VBN".to_string()));
    }

    // Live rule: unknown -ing words become VBG here instead of staying NN.
    if length > 4
        && token.ends_with("ing")
        && !["NNP", "NNPS", "VBG"].contains(&tag)
        && !["VBG", "DT", "JJ", "NN"].contains(&prev_tag)
        && (prev_tag.is_empty() || !capitalized)
        && !lexicon.ing_exceptions.contains(token)
        && !dictionary.is_known(token)
    {
        return Some(Correction::Retag("VBG".to_string()));
    }

    if length > 4
        && token.ends_with("in")
        && tag == "NN"
        && !["NN", "JJ", "DT", "VBG"].contains(&prev_tag)
        && dictionary.lists(&format!("{}g", token), "VBG")
    {
        return Some(Correction::Retag("VBG".to_string()));
    }

    if dictionary.lists(token, "PDT") && next_tag == "DT" {
        return Some(Correction::Retag("PDT".to_string()));
    }

    let prev_word = w.word_at(-1);
    if (prev_word.is_empty() || prev_word == "\"" || prev_word == "said" || prev_tag.starts_with('W'))
        && token == "that"
        && tag == "IN"
        && next_tag == "MD"
    {
        return Some(Correction::Retag("DT".to_string()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a sequence with the given tags, run the sweep, return the tags.
    fn sweep(tokens: &[&str], tags: &[&str]) -> TaggedSequence {
        let mut seq = TaggedSequence::new(tokens.iter().map(|t| t.to_string()).collect(), vec![]);
        seq.tags = tags.iter().map(|t| t.to_string()).collect();
        apply(&mut seq, &Lexicon::embedded());
        seq
    }

    #[test]
    fn test_numerals_are_locked() {
        for numeral in ["1999", "'99", "10-20", "3/4", "10:30", "42"] {
            let seq = sweep(&["about", numeral], &["IN", "NN"]);
            assert_eq!(seq.tags[1], "CD", "{}", numeral);
            assert_eq!(seq.confidence[1], 1.0);
            assert!(seq.blocked[1]);
        }
        let seq = sweep(&["1.5"], &["NN"]);
        assert_eq!(seq.tags[0], "NN");
    }

    #[test]
    fn test_scale_words_are_locked() {
        for word in ["hundred", "Thousands", "million", "trillion", "quadrillions"] {
            let seq = sweep(&["two", word], &["CD", "CD"]);
            assert_eq!(seq.tags[1], "NNS", "{}", word);
            assert_eq!(seq.confidence[1], 1.0, "{}", word);
            assert!(seq.blocked[1]);
        }
    }

    #[test]
    fn test_sentence_initial_that() {
        let seq = sweep(&["That", "is", "fine"], &["IN", "VBZ", "JJ"]);
        assert_eq!(seq.tags[0], "DT");
        assert!(seq.blocked[0]);

        let seq = sweep(&["so", "that"], &["RB", "IN"]);
        assert_eq!(seq.tags[1], "IN");
    }

    #[test]
    fn test_infinitive_after_to() {
        let seq = sweep(&["to", "walk"], &["TO", "NN"]);
        assert_eq!(seq.tags[1], "VB");
        assert!(seq.blocked[1]);
        assert_eq!(seq.confidence[1], 1.0);

        let seq = sweep(&["to", "dogs"], &["TO", "NNS"]);
        assert_eq!(seq.tags[1], "NNS");
        assert!(!seq.blocked[1]);
    }

    #[test]
    fn test_unknown_plural_noun() {
        let seq = sweep(&["the", "blorfts"], &["DT", "NN"]);
        assert_eq!(seq.tags[1], "NNS");
        assert!(!seq.blocked[1]);
    }

    #[test]
    fn test_adjective_before_determiner_becomes_verb() {
        let seq = sweep(&["they", "open", "the", "door"], &["PRP", "JJ", "DT", "NN"]);
        assert_eq!(seq.tags[1], "VB");
    }

    #[test]
    fn test_participle_chain() {
        let seq = sweep(&["better", "known"], &["JJR", "VBD"]);
        assert_eq!(seq.tags[1], "VBN");

        // previous tag allowed but no chain matches
        let seq = sweep(&["he", "had"], &["PRP", "VBD"]);
        assert_eq!(seq.tags[1], "VBD");
    }

    #[test]
    fn test_unknown_ed_word_is_participle() {
        let seq = sweep(&["was", "blorfed"], &["VBD", "NN"]);
        assert_eq!(seq.tags[1], "VBN");

        // -eed endings are left alone
        let seq = sweep(&["was", "blorfeed"], &["VBD", "NN"]);
        assert_eq!(seq.tags[1], "NN");

        // sentence initial
        let seq = sweep(&["blorfed"], &["NN"]);
        assert_eq!(seq.tags[0], "NN");
    }

    #[test]
    fn test_unknown_ing_word_is_gerund() {
        let seq = sweep(&["kept", "blorfing"], &["VBD", "NN"]);
        assert_eq!(seq.tags[1], "VBG");

        let seq = sweep(&["he", "sibling"], &["PRP", "NN"]);
        assert_eq!(seq.tags[1], "NN");

        let seq = sweep(&["the", "blorfing"], &["DT", "NN"]);
        assert_eq!(seq.tags[1], "NN");
    }

    #[test]
    fn test_dropped_g_gerund() {
        let seq = sweep(&["is", "runnin"], &["VBZ", "NN"]);
        assert_eq!(seq.tags[1], "VBG");
    }

    #[test]
    fn test_predeterminer() {
        let seq = sweep(&["all", "the", "dogs"], &["DT", "DT", "NNS"]);
        assert_eq!(seq.tags[0], "PDT");
    }

    #[test]
    fn test_that_before_modal() {
        let seq = sweep(&["said", "that", "would"], &["VBD", "IN", "MD"]);
        assert_eq!(seq.tags[1], "DT");
    }

    #[test]
    fn test_blocked_tokens_untouched() {
        let mut seq = TaggedSequence::new(vec!["1999".to_string()], vec![]);
        seq.tags = vec!["NNP".to_string()];
        seq.blocked = vec![true];
        apply(&mut seq, &Lexicon::embedded());
        assert_eq!(seq.tags[0], "NNP");
        assert_eq!(seq.confidence[0], 0.0);
    }
}
