//! Final corrections applied after the rule cascade.
//!
//! A single left-to-right sweep over unblocked tokens. The checks form an
//! ordered decision list: the first one that matches decides the token and
//! the rest are skipped. Conditions read the tag the token had when the
//! sweep reached it, along with the already-corrected tags to its left.

use crate::lexicon::{Lexicon, VerbForm};

use super::types::{TaggedSequence, Window};

/// Verbs whose "in" is a particle ("walk in", "come in").
const PARTICLE_IN_VERBS: &[&str] = &[
    "walk", "throw", "move", "go", "cash", "come", "bring", "lock", "put", "take",
];

/// Verbs whose particle reads as an adverb ("get on", "be off").
const ADVERBIAL_PARTICLE_VERBS: &[&str] = &["get", "be", "go"];

const DO_FORMS: &[&str] = &["do", "does", "did"];

const TIME_OF_DAY: &[&str] = &["am", "a.m.", "a.m", "p.m", "pm", "p.m."];

pub(crate) fn apply(seq: &mut TaggedSequence, lexicon: &Lexicon) {
    for index in 0..seq.len() {
        if seq.blocked[index] {
            continue;
        }
        if let Some(tag) = decide(&Context::new(Window::new(seq, index), lexicon)) {
            seq.tags[index] = tag;
        }
    }
}

/// Everything the decision list reads about one token.
struct Context<'a> {
    lexicon: &'a Lexicon,
    tag: &'a str,
    word: &'a str,
    prev1_tag: &'a str,
    prev2_tag: &'a str,
    prev3_tag: &'a str,
    next1_tag: &'a str,
    next2_tag: &'a str,
    prev1_word: &'a str,
    prev2_word: &'a str,
    next1_word: &'a str,
    next2_word: &'a str,
}

impl<'a> Context<'a> {
    fn new(w: Window<'a>, lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            tag: w.tag(),
            word: w.word(),
            prev1_tag: w.tag_at(-1),
            prev2_tag: w.tag_at(-2),
            prev3_tag: w.tag_at(-3),
            next1_tag: w.tag_at(1),
            next2_tag: w.tag_at(2),
            prev1_word: w.word_at(-1),
            prev2_word: w.word_at(-2),
            next1_word: w.word_at(1),
            next2_word: w.word_at(2),
        }
    }

    /// Some dictionary alternative of the token starts with `family`.
    fn lists(&self, family: &str) -> bool {
        self.lexicon.dictionary.lists(self.word, family)
    }

    /// Present-tense (VBP) form of the previous word.
    fn prev_verb_base(&self) -> String {
        self.lexicon.inflector.conjugate(self.prev1_word, VerbForm::Vbp)
    }

    /// "do"-support or an auxiliary context that calls for a base form.
    fn after_do(&self) -> bool {
        ((self.prev1_word == "n't" || self.prev1_word == "not") && DO_FORMS.contains(&self.prev2_word))
            || DO_FORMS.contains(&self.prev1_word)
    }

    /// "to X and" before the token.
    fn after_infinitive_coordination(&self) -> bool {
        self.prev1_tag == "CC" && self.prev2_tag == "VB" && self.prev3_tag == "TO"
    }
}

fn decide(c: &Context<'_>) -> Option<String> {
    if c.word == "like" && c.prev1_tag == "MD" {
        return retag("VB");
    }

    if c.prev1_word == "was" && c.word.ends_with("ing") {
        return retag("VBG");
    }

    if c.prev1_tag == "PRP" && c.tag.starts_with('N') {
        let alternative = c
            .lexicon
            .dictionary
            .alternatives(c.word)
            .and_then(|alternatives| alternatives.iter().find(|alt| !alt.starts_with('N')));
        if let Some(alternative) = alternative {
            return Some(alternative.clone());
        }
    }

    closed_words(c)
        .or_else(|| wdt_between_noun_and_adjective(c))
        .or_else(|| time_of_day(c))
        .or_else(|| adverbs(c))
        .or_else(|| adjectives(c))
        .or_else(|| nouns(c))
        .or_else(|| verbs(c))
}

fn retag(tag: &str) -> Option<String> {
    Some(tag.to_string())
}

fn closed_words(c: &Context<'_>) -> Option<String> {
    match c.word {
        "only" if c.next1_tag == "NN" => retag("JJ"),
        "is" => retag("VBZ"),
        "that" => {
            if c.tag == "WDT"
                && (c.next1_tag.starts_with('N') || ["PRP", "PRP$", "WP", "IN"].contains(&c.next1_tag))
            {
                retag("IN")
            } else if c.prev1_tag == "TO" {
                retag("DT")
            } else {
                None
            }
        }
        "much" => {
            if c.tag == "JJ" && c.next1_tag == "JJR" && c.prev1_tag != "RB" {
                retag("RB")
            } else if c.tag == "RB" && c.prev1_tag == "RB" && c.next1_word != "as" {
                retag("JJ")
            } else {
                None
            }
        }
        "in" if c.tag == "IN"
            && c.prev1_tag.starts_with('V')
            && PARTICLE_IN_VERBS.contains(&c.prev_verb_base().as_str()) =>
        {
            retag("RP")
        }
        "while" if c.prev1_tag == "DT" || (c.prev2_tag == "DT" && c.prev1_tag == "JJ") => retag("NN"),
        _ => None,
    }
}

fn wdt_between_noun_and_adjective(c: &Context<'_>) -> Option<String> {
    (c.tag == "WDT" && c.prev1_tag.starts_with("NN") && c.next1_tag == "JJ").then(|| "IN".to_string())
}

fn time_of_day(c: &Context<'_>) -> Option<String> {
    (TIME_OF_DAY.contains(&c.word) && c.prev1_tag == "CD").then(|| "RB".to_string())
}

fn adverbs(c: &Context<'_>) -> Option<String> {
    if c.tag == "RP"
        && (!c.prev1_tag.starts_with('V')
            || ADVERBIAL_PARTICLE_VERBS.contains(&c.prev_verb_base().as_str()))
    {
        return retag("RB");
    }

    if c.tag == "RB" && (c.word == "when" || c.word == "how") {
        return retag("WRB");
    }

    None
}

fn adjectives(c: &Context<'_>) -> Option<String> {
    if c.tag == "JJR"
        && (c.next1_tag == "RB"
            || ((c.next1_tag == "," || c.next1_tag == ".") && c.prev1_tag == "NN" && c.prev2_tag == "DT"))
    {
        return retag("RBR");
    }

    if c.tag == "JJS" && c.next1_tag == "RB" {
        return retag("RBS");
    }

    if c.tag == "JJ" {
        let lists_noun = c.lists("NN");
        if ((c.next1_tag == "." || c.next1_tag.is_empty()) && c.prev1_tag == "DT" && c.prev2_tag == "IN")
            || (c.prev1_tag == "DT" && c.next1_tag == "TO" && lists_noun)
            || (c.next1_tag.starts_with('V') && lists_noun)
            || (c.next1_tag == "MD" && lists_noun)
        {
            return retag("NN");
        }

        if c.next1_tag == "JJ" && c.lists("VBG") {
            return retag("VBG");
        }

        if ["VBZ", "VBD", "VBP", "VBG"].contains(&c.prev1_tag)
            && c.lists("VBN")
            && (["TO", "RB", ".", ",", ""].contains(&c.next1_tag)
                || c.next1_word == "by"
                || c.next2_word == "by")
        {
            return retag("VBN");
        }
    }

    None
}

fn nouns(c: &Context<'_>) -> Option<String> {
    if c.tag != "NN" {
        return None;
    }

    if c.lexicon.inflector.is_known_infinitive(c.word)
        && (c.after_infinitive_coordination()
            || c.after_do()
            || (c.prev1_tag == "'" && c.prev2_tag == "TO"))
    {
        return retag("VB");
    }

    if c.lists("VBP") && c.prev1_tag.starts_with('N') && (c.next1_tag == "DT" || c.next1_tag == "PRP") {
        return retag("VBP");
    }

    None
}

fn verbs(c: &Context<'_>) -> Option<String> {
    if c.tag == "VBZ" && c.lists("NNS") && c.next1_tag == "MD" {
        return retag("NNS");
    }

    if c.tag == "VBP"
        && (c.after_infinitive_coordination()
            || c.after_do()
            || (c.prev1_tag == "\"" && c.prev2_tag == "TO")
            || c.prev1_tag == "TO"
            || c.prev1_tag == "MD"
            || (c.prev1_tag == "RB" && c.prev2_tag == "MD")
            || (c.prev1_tag == "RB" && c.prev2_tag == "VBP"))
    {
        return retag("VB");
    }

    if c.tag == "VBN" && c.lists("VBD") && past_tense_context(c) {
        return retag("VBD");
    }

    if c.tag == "VBD" && c.prev1_word == "than" && c.lists("VBN") {
        return retag("VBN");
    }

    if c.tag == "VBD" && c.lists("VBN") {
        if c.next1_tag.starts_with('N') && c.prev1_tag == "IN" {
            return retag("JJ");
        }
        if participle_after_adverb(c) || participle_context(c) {
            return retag("VBN");
        }
    }

    None
}

/// A `VBN` reading that is really a simple past: after a subject-like
/// token, or a noun phrase followed by what looks like an object.
fn past_tense_context(c: &Context<'_>) -> bool {
    let noun_phrase_before = c.prev1_tag.starts_with('N')
        || c.prev1_tag == "\""
        || (c.prev1_tag == "CC" && c.prev2_tag.starts_with('N'))
        || (c.prev1_tag == "RB" && c.prev2_tag.starts_with('N'));
    let object_after = c.next1_tag == "."
        || c.next1_tag.starts_with('N')
        || c.next1_tag.starts_with('J')
        || c.next1_tag == "DT"
        || c.next1_word == "with"
        || c.next1_tag == "RB";

    c.prev1_tag == "EX"
        || c.prev1_tag == "PRP"
        || (c.prev1_tag == "RB" && c.prev2_tag == "PRP")
        || c.prev1_tag == "WDT"
        || c.prev1_tag == "WP"
        || (c.word == "had" && !["has", "have", "'ve"].contains(&c.prev1_word))
        || (noun_phrase_before && object_after)
}

fn participle_after_adverb(c: &Context<'_>) -> bool {
    c.prev1_tag == "RB"
        && ((c.prev2_tag == "DT" && c.prev3_tag == "IN")
            || (c.prev2_tag == "RB" && c.prev3_tag == "VBZ")
            || ((c.prev3_tag.starts_with('N') || c.prev3_tag == "PRP")
                && ["VBZ", "VBP", "VBD"].contains(&c.prev2_tag)))
}

fn participle_context(c: &Context<'_>) -> bool {
    c.prev1_word == "as"
        || (c.prev1_tag == "DT" && c.prev2_tag == "IN")
        || (c.prev1_tag == "VBP" && c.prev2_tag.starts_with('N') && c.prev3_tag == "DT")
        || ((c.prev2_tag == "MD" || c.prev2_tag == "TO") && c.prev1_tag == "VB")
        || c.prev1_tag == "VBD"
        || ["has", "have", "being", "be", "been"].contains(&c.prev1_word)
        || (c.prev1_tag.starts_with('V') && c.next1_tag == "IN" && c.next2_tag.starts_with('N'))
        || (c.next1_word == "by" && c.next2_tag != "CD" && c.next2_tag != "SYM")
}
