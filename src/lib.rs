pub mod cli;
pub mod corpus;
pub mod lexicon;
pub mod models;
pub mod tagger;

pub use corpus::{Corpus, InputFormat, ProcessResult, Sentence, process, read_corpus};
pub use lexicon::{Lexicon, TokenMeta};
pub use models::{ExtraData, Header, Output, SystemEnvironment, TaggedSentence};
pub use tagger::{TagResult, TaggedSequence, Tagger, tag};
