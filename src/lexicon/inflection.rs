//! Inflection utility: plural detection, verb conjugation, infinitive set.
//!
//! Conjugation first reduces a form to its base (irregular table, then
//! suffix stripping checked against the infinitive set) and inflects the
//! base into the requested form.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::Inflector;
use super::dictionary::WordDictionary;

/// Verb forms, named after their Penn tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbForm {
    /// base form: "take"
    Vb,
    /// non-3rd person singular present: "take", "are"
    Vbp,
    /// 3rd person singular present: "takes"
    Vbz,
    /// past tense: "took"
    Vbd,
    /// past participle: "taken"
    Vbn,
    /// gerund / present participle: "taking"
    Vbg,
}

/// (base, past, past participle)
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("be", "was", "been"),
    ("have", "had", "had"),
    ("do", "did", "done"),
    ("go", "went", "gone"),
    ("come", "came", "come"),
    ("become", "became", "become"),
    ("take", "took", "taken"),
    ("bring", "brought", "brought"),
    ("buy", "bought", "bought"),
    ("think", "thought", "thought"),
    ("catch", "caught", "caught"),
    ("teach", "taught", "taught"),
    ("fight", "fought", "fought"),
    ("put", "put", "put"),
    ("cut", "cut", "cut"),
    ("set", "set", "set"),
    ("let", "let", "let"),
    ("hit", "hit", "hit"),
    ("hurt", "hurt", "hurt"),
    ("shut", "shut", "shut"),
    ("cost", "cost", "cost"),
    ("read", "read", "read"),
    ("throw", "threw", "thrown"),
    ("grow", "grew", "grown"),
    ("know", "knew", "known"),
    ("draw", "drew", "drawn"),
    ("fly", "flew", "flown"),
    ("get", "got", "gotten"),
    ("forget", "forgot", "forgotten"),
    ("make", "made", "made"),
    ("see", "saw", "seen"),
    ("say", "said", "said"),
    ("pay", "paid", "paid"),
    ("lay", "laid", "laid"),
    ("give", "gave", "given"),
    ("find", "found", "found"),
    ("tell", "told", "told"),
    ("sell", "sold", "sold"),
    ("leave", "left", "left"),
    ("feel", "felt", "felt"),
    ("keep", "kept", "kept"),
    ("sleep", "slept", "slept"),
    ("meet", "met", "met"),
    ("lead", "led", "led"),
    ("send", "sent", "sent"),
    ("spend", "spent", "spent"),
    ("build", "built", "built"),
    ("lose", "lost", "lost"),
    ("mean", "meant", "meant"),
    ("hear", "heard", "heard"),
    ("hold", "held", "held"),
    ("stand", "stood", "stood"),
    ("understand", "understood", "understood"),
    ("sit", "sat", "sat"),
    ("win", "won", "won"),
    ("begin", "began", "begun"),
    ("run", "ran", "run"),
    ("swim", "swam", "swum"),
    ("sing", "sang", "sung"),
    ("drink", "drank", "drunk"),
    ("write", "wrote", "written"),
    ("drive", "drove", "driven"),
    ("ride", "rode", "ridden"),
    ("rise", "rose", "risen"),
    ("speak", "spoke", "spoken"),
    ("break", "broke", "broken"),
    ("choose", "chose", "chosen"),
    ("steal", "stole", "stolen"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("hide", "hid", "hidden"),
    ("shake", "shook", "shaken"),
    ("lie", "lay", "lain"),
];

/// Present forms the regular rules would get wrong.
const IRREGULAR_PRESENT: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("were", "be"),
    ("has", "have"),
    ("does", "do"),
];

static FORM_TO_BASE: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut forms = HashMap::new();
    for &(base, past, participle) in IRREGULAR_VERBS {
        forms.insert(base.to_string(), base);
        forms.insert(past.to_string(), base);
        forms.insert(participle.to_string(), base);
        forms.insert(third_person_singular(base), base);
        forms.insert(present_participle(base), base);
    }
    for &(form, base) in IRREGULAR_PRESENT {
        forms.insert(form.to_string(), base);
    }
    // "saw", "lay", "left", ... are also bases or nouns of their own; the
    // irregular reading is the one the tagger asks about.
    forms
});

const IRREGULAR_PLURALS: &[&str] = &[
    "men", "women", "children", "people", "feet", "teeth", "geese", "mice", "lice", "oxen",
    "data", "criteria", "phenomena", "alumni", "cacti", "fungi", "nuclei", "dice",
];

/// Words ending in `s` that are not plurals.
const SINGULAR_S: &[&str] = &[
    "news", "series", "species", "means", "lens", "gas", "bus", "yes", "this", "his", "hers",
    "its", "ours", "yours", "theirs", "was", "has", "does", "always", "perhaps", "thus",
    "unless", "whereas", "besides", "towards", "afterwards", "sometimes", "nowadays", "chaos",
    "ethos", "kudos", "atlas", "canvas", "alias", "bias", "christmas", "as", "us",
];

const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ics", "'s", "\u{2019}s"];

/// Default inflector backed by the irregular tables and the dictionary's
/// infinitives.
#[derive(Debug, Clone, Default)]
pub struct Morphology {
    infinitives: HashSet<String>,
}

impl Morphology {
    pub fn new<I>(infinitives: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut infinitives: HashSet<String> = infinitives.into_iter().collect();
        infinitives.extend(IRREGULAR_VERBS.iter().map(|(base, _, _)| base.to_string()));
        Self { infinitives }
    }

    /// Every dictionary word listing `VB` counts as a known infinitive.
    pub fn from_dictionary(dictionary: &WordDictionary) -> Self {
        Self::new(dictionary.words_tagged("VB").map(str::to_string))
    }

    pub fn infinitive_count(&self) -> usize {
        self.infinitives.len()
    }

    /// Reduce any verb form to its base form.
    pub fn base_form(&self, token: &str) -> String {
        let word = token.to_lowercase();
        if let Some(base) = FORM_TO_BASE.get(&word) {
            return base.to_string();
        }
        if self.infinitives.contains(&word) {
            return word;
        }

        let candidates = strip_candidates(&word);
        candidates
            .iter()
            .find(|candidate| self.infinitives.contains(candidate.as_str()))
            .or(candidates.first())
            .cloned()
            .unwrap_or(word)
    }
}

impl Inflector for Morphology {
    fn is_plural(&self, token: &str) -> bool {
        let word = token.to_lowercase();
        if IRREGULAR_PLURALS.contains(&word.as_str()) {
            return true;
        }
        if word.len() < 3 || SINGULAR_S.contains(&word.as_str()) {
            return false;
        }
        if SINGULAR_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
            return false;
        }
        word.ends_with('s')
    }

    fn conjugate(&self, token: &str, form: VerbForm) -> String {
        inflect(&self.base_form(token), form)
    }

    fn is_known_infinitive(&self, token: &str) -> bool {
        self.infinitives.contains(token)
    }
}

/// Candidate bases for a regular inflected form, most likely first.
fn strip_candidates(word: &str) -> Vec<String> {
    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        return vec![format!("{}y", stem)];
    }
    if let Some(stem) = word.strip_suffix("ing").filter(long_enough) {
        return vec![stem.to_string(), format!("{}e", stem), undouble(stem)];
    }
    if let Some(stem) = word.strip_suffix("ed").filter(long_enough) {
        return vec![stem.to_string(), format!("{}e", stem), undouble(stem)];
    }
    if let Some(stem) = word.strip_suffix("es").filter(long_enough) {
        return vec![format!("{}e", stem), stem.to_string()];
    }
    if let Some(stem) = word.strip_suffix('s').filter(|stem| long_enough(stem) && !stem.ends_with('s')) {
        return vec![stem.to_string()];
    }
    Vec::new()
}

/// Drop one letter of a doubled final consonant ("stopp" → "stop").
fn undouble(stem: &str) -> String {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(last), Some(before)) if last == before => {
            stem[..stem.len() - last.len_utf8()].to_string()
        }
        _ => stem.to_string(),
    }
}

fn long_enough(stem: &&str) -> bool {
    stem.chars().count() >= 2
}

/// Inflect a base form.
fn inflect(base: &str, form: VerbForm) -> String {
    let irregular = IRREGULAR_VERBS.iter().find(|(b, _, _)| *b == base);
    match form {
        VerbForm::Vb => base.to_string(),
        VerbForm::Vbp => match base {
            "be" => "are".to_string(),
            _ => base.to_string(),
        },
        VerbForm::Vbz => match base {
            "be" => "is".to_string(),
            "have" => "has".to_string(),
            _ => third_person_singular(base),
        },
        VerbForm::Vbd => irregular.map_or_else(|| regular_past(base), |(_, past, _)| past.to_string()),
        VerbForm::Vbn => {
            irregular.map_or_else(|| regular_past(base), |(_, _, participle)| participle.to_string())
        }
        VerbForm::Vbg => present_participle(base),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Consonant-vowel-consonant endings double before a vowel suffix
/// ("stop" → "stopped"), for one-syllable bases and a few stressed finals.
fn doubles_final_consonant(base: &str) -> bool {
    let chars: Vec<char> = base.chars().collect();
    let n = chars.len();
    if n < 3 {
        return false;
    }
    let (c1, v, c2) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    let cvc = !is_vowel(c1) && is_vowel(v) && !is_vowel(c2) && !matches!(c2, 'w' | 'x' | 'y');
    let syllables = chars.iter().filter(|c| is_vowel(**c)).count();
    cvc && (syllables == 1 || base.ends_with("gin") || base.ends_with("get") || base.ends_with("mit"))
}

fn third_person_singular(base: &str) -> String {
    if base.ends_with('s')
        || base.ends_with('x')
        || base.ends_with('z')
        || base.ends_with("sh")
        || base.ends_with("ch")
        || base.ends_with('o')
    {
        format!("{}es", base)
    } else if let Some(stem) = base.strip_suffix('y').filter(|stem| {
        stem.chars().last().is_some_and(|c| !is_vowel(c))
    }) {
        format!("{}ies", stem)
    } else {
        format!("{}s", base)
    }
}

fn regular_past(base: &str) -> String {
    if base.ends_with('e') {
        format!("{}d", base)
    } else if let Some(stem) = base.strip_suffix('y').filter(|stem| {
        stem.chars().last().is_some_and(|c| !is_vowel(c))
    }) {
        format!("{}ied", stem)
    } else if doubles_final_consonant(base) {
        let last = base.chars().last().unwrap_or_default();
        format!("{}{}ed", base, last)
    } else {
        format!("{}ed", base)
    }
}

fn present_participle(base: &str) -> String {
    if let Some(stem) = base.strip_suffix("ie") {
        format!("{}ying", stem)
    } else if let Some(stem) = base.strip_suffix('e').filter(|stem| {
        long_enough(stem) && !stem.ends_with('e') && !stem.ends_with('y') && !stem.ends_with('o')
    }) {
        format!("{}ing", stem)
    } else if doubles_final_consonant(base) {
        let last = base.chars().last().unwrap_or_default();
        format!("{}{}ing", base, last)
    } else {
        format!("{}ing", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morphology() -> Morphology {
        Morphology::new(
            ["walk", "move", "stop", "watch", "carry", "lock", "cash"].map(String::from),
        )
    }

    #[test]
    fn test_is_plural() {
        let m = morphology();
        assert!(m.is_plural("dogs"));
        assert!(m.is_plural("Boxes"));
        assert!(m.is_plural("children"));
        assert!(m.is_plural("men"));
        assert!(!m.is_plural("dog"));
        assert!(!m.is_plural("glass"));
        assert!(!m.is_plural("virus"));
        assert!(!m.is_plural("analysis"));
        assert!(!m.is_plural("news"));
        assert!(!m.is_plural("physics"));
        assert!(!m.is_plural("is"));
        assert!(!m.is_plural(""));
    }

    #[test]
    fn test_base_form_irregular() {
        let m = morphology();
        assert_eq!(m.base_form("went"), "go");
        assert_eq!(m.base_form("brought"), "bring");
        assert_eq!(m.base_form("thrown"), "throw");
        assert_eq!(m.base_form("is"), "be");
        assert_eq!(m.base_form("being"), "be");
        assert_eq!(m.base_form("taking"), "take");
    }

    #[test]
    fn test_base_form_regular() {
        let m = morphology();
        assert_eq!(m.base_form("walked"), "walk");
        assert_eq!(m.base_form("moved"), "move");
        assert_eq!(m.base_form("moving"), "move");
        assert_eq!(m.base_form("stopped"), "stop");
        assert_eq!(m.base_form("watches"), "watch");
        assert_eq!(m.base_form("moves"), "move");
        assert_eq!(m.base_form("carried"), "carry");
        assert_eq!(m.base_form("locks"), "lock");
    }

    #[test]
    fn test_base_form_multibyte_stems() {
        let m = morphology();
        // U+1082 encodes as E1 82 82, so its last two bytes are equal
        assert_eq!(m.base_form("aa\u{1082}ing"), "aa\u{1082}");
        assert_eq!(m.base_form("aa\u{1082}ed"), "aa\u{1082}");
        assert_eq!(m.base_form("caféing"), "café");
        assert_eq!(m.base_form("éing"), "éing");
        assert_eq!(strip_candidates("ññing"), vec!["ññ", "ññe", "ñ"]);
        assert_eq!(m.conjugate("aa\u{1082}ing", VerbForm::Vbp), "aa\u{1082}");
    }

    #[test]
    fn test_conjugate_vbp() {
        let m = morphology();
        assert_eq!(m.conjugate("went", VerbForm::Vbp), "go");
        assert_eq!(m.conjugate("was", VerbForm::Vbp), "are");
        assert_eq!(m.conjugate("be", VerbForm::Vbp), "are");
        assert_eq!(m.conjugate("gets", VerbForm::Vbp), "get");
        assert_eq!(m.conjugate("cashed", VerbForm::Vbp), "cash");
    }

    #[test]
    fn test_conjugate_other_forms() {
        let m = morphology();
        assert_eq!(m.conjugate("walk", VerbForm::Vbz), "walks");
        assert_eq!(m.conjugate("go", VerbForm::Vbz), "goes");
        assert_eq!(m.conjugate("carry", VerbForm::Vbz), "carries");
        assert_eq!(m.conjugate("stop", VerbForm::Vbd), "stopped");
        assert_eq!(m.conjugate("move", VerbForm::Vbd), "moved");
        assert_eq!(m.conjugate("took", VerbForm::Vbn), "taken");
        assert_eq!(m.conjugate("stop", VerbForm::Vbg), "stopping");
        assert_eq!(m.conjugate("move", VerbForm::Vbg), "moving");
        assert_eq!(m.conjugate("lie", VerbForm::Vbg), "lying");
        assert_eq!(m.conjugate("be", VerbForm::Vbg), "being");
        assert_eq!(m.conjugate("begin", VerbForm::Vbg), "beginning");
    }

    #[test]
    fn test_known_infinitives_include_irregular_bases() {
        let m = morphology();
        assert!(m.is_known_infinitive("walk"));
        assert!(m.is_known_infinitive("go"));
        assert!(!m.is_known_infinitive("dog"));
        assert!(!m.is_known_infinitive("went"));
    }
}
