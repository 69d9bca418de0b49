use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::models::TaggedSentence;
use crate::tagger::Tagger;

use super::{Corpus, ProcessResult};

/// Tag every sentence of `corpus` in parallel. With `initial_only` the
/// smoothing stages are skipped. Output order follows input order.
pub fn process(
    corpus: Corpus,
    tagger: &Tagger,
    progress_bar: &ProgressBar,
    initial_only: bool,
) -> ProcessResult {
    let sentences = corpus
        .sentences
        .into_par_iter()
        .map(|sentence| {
            let mut seq = tagger.resolve_initial(&sentence.tokens, sentence.meta);
            if !initial_only {
                tagger.smooth(&mut seq);
            }
            progress_bar.inc(1);
            TaggedSentence::new(sentence.line, seq.into())
        })
        .collect();

    ProcessResult {
        sentences,
        errors: corpus.errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{InputFormat, read::parse_corpus};

    #[test]
    fn test_process_keeps_input_order() {
        let corpus = parse_corpus("The dog runs .\nHe had gone .\n", InputFormat::Text, "test");
        let result = process(corpus, &Tagger::with_defaults(), &ProgressBar::hidden(), false);
        assert_eq!(result.sentences.len(), 2);
        assert_eq!(result.sentences[0].line, 1);
        assert_eq!(result.sentences[0].tags, vec!["DT", "NN", "VBZ", "."]);
        assert_eq!(result.sentences[1].tags[1], "VBD");
    }

    #[test]
    fn test_initial_only_skips_smoothing() {
        let corpus = parse_corpus("She does not care .\n", InputFormat::Text, "test");
        let tagger = Tagger::with_defaults();
        let initial = process(corpus, &tagger, &ProgressBar::hidden(), true);
        // "care" keeps its primary dictionary tag without the post-rule pass
        assert_eq!(initial.sentences[0].tags[3], "NN");

        let corpus = parse_corpus("She does not care .\n", InputFormat::Text, "test");
        let smoothed = process(corpus, &tagger, &ProgressBar::hidden(), false);
        assert_eq!(smoothed.sentences[0].tags[3], "VB");
    }

    #[test]
    fn test_errors_are_carried_through() {
        let corpus = parse_corpus("{\"tokens\": [\"ok\"]}\n{bad\n", InputFormat::Jsonl, "in.jsonl");
        let result = process(corpus, &Tagger::with_defaults(), &ProgressBar::hidden(), false);
        assert_eq!(result.sentences.len(), 1);
        assert_eq!(result.errors.len(), 1);
    }
}
