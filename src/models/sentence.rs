use serde::Serialize;

use crate::tagger::TagResult;

/// Tagged sentence as written to the output report.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TaggedSentence {
    pub line: usize,
    pub tokens: Vec<String>,
    pub tags: Vec<String>,
    pub confidence: Vec<f64>,
}

impl TaggedSentence {
    pub fn new(line: usize, result: TagResult) -> Self {
        Self {
            line,
            tokens: result.tokens,
            tags: result.tags,
            confidence: result.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_order() {
        let sentence = TaggedSentence::new(
            4,
            TagResult {
                tokens: vec!["hi".to_string()],
                tags: vec!["UH".to_string()],
                confidence: vec![1.0],
            },
        );
        let json = serde_json::to_string(&sentence).unwrap();
        assert_eq!(json, r#"{"line":4,"tokens":["hi"],"tags":["UH"],"confidence":[1.0]}"#);
    }
}
