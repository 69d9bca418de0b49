use clap::Parser;

use crate::corpus::InputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file with one pre-tokenized sentence per line
    pub input: String,

    /// Output file path
    #[arg(default_value = "output.json", short)]
    pub output_file: String,

    /// Layout of the input file
    #[arg(long, value_enum, default_value_t = InputFormat::Text)]
    pub input_format: InputFormat,

    /// Directory with lexicon files overriding the built-in ones
    #[arg(long)]
    pub lexicon_dir: Option<String>,

    /// Contextual rule file replacing the built-in table
    #[arg(long)]
    pub rules: Option<String>,

    /// Stop after initial resolution and skip smoothing
    #[arg(long)]
    pub initial_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["lexitag", "in.txt"]);
        assert_eq!(cli.input, "in.txt");
        assert_eq!(cli.output_file, "output.json");
        assert_eq!(cli.input_format, InputFormat::Text);
        assert!(cli.lexicon_dir.is_none());
        assert!(!cli.initial_only);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "lexitag",
            "in.jsonl",
            "-o",
            "out.json",
            "--input-format",
            "jsonl",
            "--lexicon-dir",
            "lex",
            "--rules",
            "rules.txt",
            "--initial-only",
        ]);
        assert_eq!(cli.output_file, "out.json");
        assert_eq!(cli.input_format, InputFormat::Jsonl);
        assert_eq!(cli.lexicon_dir.as_deref(), Some("lex"));
        assert_eq!(cli.rules.as_deref(), Some("rules.txt"));
        assert!(cli.initial_only);
    }
}
