//! Repetition detector: stretched words ("sooo", "nooooo") and laughter.

use super::TokenClassifier;

const INTERJECTION: &str = "UH";

/// Syllables that form laughter when repeated ("haha", "hehehe").
const LAUGH_UNITS: &[&str] = &["ha", "he", "hi", "ho", "ah", "aw"];

#[derive(Debug, Clone, Copy, Default)]
pub struct RepetitionDetector;

impl TokenClassifier for RepetitionDetector {
    fn classify(&self, token: &str) -> Option<&str> {
        if has_stretched_letter(token) || is_laughter(&token.to_lowercase()) {
            Some(INTERJECTION)
        } else {
            None
        }
    }
}

/// Three or more identical letters in a row.
fn has_stretched_letter(token: &str) -> bool {
    let mut previous: Option<char> = None;
    let mut run = 0;
    for c in token.chars().flat_map(char::to_lowercase) {
        if Some(c) == previous {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if run >= 3 && c.is_alphabetic() {
            return true;
        }
    }
    false
}

fn is_laughter(lower: &str) -> bool {
    if lower.len() < 4 || lower.len() % 2 != 0 || !lower.is_ascii() {
        return false;
    }
    let unit = &lower.as_bytes()[..2];
    LAUGH_UNITS.iter().any(|laugh| laugh.as_bytes() == unit)
        && lower.as_bytes().chunks(2).all(|chunk| chunk == unit)
}
