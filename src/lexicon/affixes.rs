//! Prefix and suffix tag patterns for words missing from the dictionary.
//!
//! Patterns are tried in order and the first match wins. Both tables are
//! compiled once via LazyLock and matched case-insensitively, so a
//! sentence-initial capital does not hide a suffix.

use std::sync::LazyLock;

use regex::Regex;

use super::TokenClassifier;

/// A compiled pattern entry: regex + the tag it maps to.
struct PatternEntry {
    regex: Regex,
    tag: &'static str,
}

/// Compiled patterns, in order. First match wins.
pub(super) struct CompiledPatterns {
    patterns: Vec<PatternEntry>,
}

impl CompiledPatterns {
    fn compile(raw_patterns: &[(&str, &'static str)]) -> Self {
        let patterns = raw_patterns
            .iter()
            .map(|&(regex_str, tag)| PatternEntry {
                regex: Regex::new(&format!("(?i){}", regex_str))
                    .unwrap_or_else(|e| panic!("Failed to compile regex '{}': {}", regex_str, e)),
                tag,
            })
            .collect();
        Self { patterns }
    }

    /// Match a token against all patterns, returning the first matching tag.
    pub(super) fn match_token(&self, value: &str) -> Option<&'static str> {
        self.patterns
            .iter()
            .find(|entry| entry.regex.is_match(value))
            .map(|entry| entry.tag)
    }
}

const NOUN_PREFIXES: &str = "(anti|auto|bio|co|counter|cyber|geo|hyper|inter|macro|mega|micro|mini|multi|neo|poly|post|pseudo|semi|sub|super|tele|trans|ultra)";
const VERB_PREFIXES: &str = "(re|over|under|out|mis|pre|de|dis|un)";

static PREFIX_PATTERNS: LazyLock<CompiledPatterns> = LazyLock::new(|| {
    let negated_adjective = r"^(un|in|im|ir|il|non|dis)-?[a-z]{3,}(able|ible|al|ful|ous|ive|ic|less|ent|ant)$";
    let verb_past = format!(r"^{}-?[a-z]{{3,}}ed$", VERB_PREFIXES);
    let verb_gerund = format!(r"^{}-?[a-z]{{3,}}ing$", VERB_PREFIXES);
    let verb_base = format!(r"^{}-?[a-z]{{3,}}(ize|ise|ate|ify|fy)$", VERB_PREFIXES);
    let noun_plural = format!(r"^{}-?[a-z]{{3,}}[^s]s$", NOUN_PREFIXES);
    let noun = format!(r"^{}-?[a-z]{{3,}}$", NOUN_PREFIXES);
    let non_adjective = r"^non-[a-z]{3,}$";

    CompiledPatterns::compile(&[
        (negated_adjective, "JJ"),
        (&verb_past, "VBN"),
        (&verb_gerund, "VBG"),
        (&verb_base, "VB"),
        (non_adjective, "JJ"),
        (&noun_plural, "NNS"),
        (&noun, "NN"),
    ])
});

static SUFFIX_PATTERNS: LazyLock<CompiledPatterns> = LazyLock::new(|| {
    CompiledPatterns::compile(&[
        // nouns, plural before singular
        (r"^[a-z]{2,}(nesses|ments|tions|sions|ities|isms|ships|hoods|doms|ances|ences)$", "NNS"),
        (r"^[a-z]{2,}(ness|ment|tion|sion|ity|ism|ship|hood|dom|ance|ence)$", "NN"),
        (r"^[a-z]{2,}(ists|ians|ers|ors)$", "NNS"),
        (r"^[a-z]{2,}(ist|ian|er|or)$", "NN"),
        // adverbs before adjectives: -ally, -ly
        (r"^[a-z]{2,}ly$", "RB"),
        (r"^[a-z]{2,}est$", "JJS"),
        (r"^[a-z]{2,}(able|ible|ful|ous|ive|less|ical|ish|ic|al|ary|esque)$", "JJ"),
        // verbs
        (r"^[a-z]{2,}(izes|ises|ifies|ates)$", "VBZ"),
        (r"^[a-z]{2,}(ized|ised|ified|ated)$", "VBN"),
        (r"^[a-z]{2,}(ize|ise|ify|ate)$", "VB"),
        (r"^[a-z]{2,}ing$", "VBG"),
        (r"^[a-z]{2,}ed$", "VBN"),
    ])
});

/// Tag classifier over one of the affix pattern tables.
pub struct AffixClassifier {
    patterns: &'static LazyLock<CompiledPatterns>,
}

impl AffixClassifier {
    pub fn prefixes() -> Self {
        Self {
            patterns: &PREFIX_PATTERNS,
        }
    }

    pub fn suffixes() -> Self {
        Self {
            patterns: &SUFFIX_PATTERNS,
        }
    }
}

impl TokenClassifier for AffixClassifier {
    fn classify(&self, token: &str) -> Option<&str> {
        self.patterns.match_token(token)
    }
}
