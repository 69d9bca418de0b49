mod output;
mod sentence;

pub use output::{ExtraData, Header, LEXITAG_OUTPUT_FORMAT_VERSION, Output, SystemEnvironment};
pub use sentence::TaggedSentence;
