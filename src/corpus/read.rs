use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::warn;

use super::{Corpus, Sentence};

/// Layout of an input corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One sentence per line, tokens separated by whitespace.
    #[default]
    Text,
    /// One JSON object per line: `{"tokens": [...], "meta": [...]}`.
    Jsonl,
}

pub fn read_corpus(path: &Path, format: InputFormat) -> Result<Corpus> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    Ok(parse_corpus(&text, format, &path.display().to_string()))
}

/// Blank lines are skipped. Malformed JSON lines are logged, recorded in
/// [`Corpus::errors`] and skipped.
pub(crate) fn parse_corpus(text: &str, format: InputFormat, source: &str) -> Corpus {
    let mut corpus = Corpus::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parsed = match format {
            InputFormat::Text => Ok(Sentence {
                tokens: line.split_whitespace().map(str::to_string).collect(),
                ..Sentence::default()
            }),
            InputFormat::Jsonl => serde_json::from_str::<Sentence>(line),
        };

        match parsed {
            Ok(mut sentence) => {
                sentence.line = line_number;
                corpus.sentences.push(sentence);
            }
            Err(e) => {
                warn!("{}:{}: skipping malformed sentence: {}", source, line_number, e);
                corpus.errors.push(format!("{}:{}: {}", source, line_number, e));
            }
        }
    }

    corpus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_corpus() {
        let corpus = parse_corpus("The dog runs .\n\n  He had gone .  \n", InputFormat::Text, "test");
        assert_eq!(corpus.sentences.len(), 2);
        assert_eq!(corpus.sentences[0].tokens, vec!["The", "dog", "runs", "."]);
        assert_eq!(corpus.sentences[1].line, 3);
        assert!(corpus.sentences[1].meta.is_empty());
        assert_eq!(corpus.token_count(), 8);
        assert!(corpus.errors.is_empty());
    }

    #[test]
    fn test_parse_jsonl_corpus() {
        let text = r#"{"tokens": ["Paris", "1999"], "meta": [{"properNoun": true}, {}]}
{"tokens": ["hi"]}
not json
{"meta": []}
"#;
        let corpus = parse_corpus(text, InputFormat::Jsonl, "test.jsonl");
        assert_eq!(corpus.sentences.len(), 2);
        assert!(corpus.sentences[0].meta[0].proper_noun);
        assert_eq!(corpus.sentences[1].tokens, vec!["hi"]);
        assert_eq!(corpus.errors.len(), 2);
        assert!(corpus.errors[0].starts_with("test.jsonl:3:"));
    }

    #[test]
    fn test_read_corpus_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_corpus(&dir.path().join("nope.txt"), InputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
