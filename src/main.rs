use chrono::Utc;
use clap::Parser;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use serde_json::to_string_pretty;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use lexitag::cli::Cli;
use lexitag::models::LEXITAG_OUTPUT_FORMAT_VERSION;
use lexitag::tagger::{default_rules, load_rules};
use lexitag::{
    ExtraData, Header, Lexicon, Output, ProcessResult, SystemEnvironment, Tagger, process,
    read_corpus,
};

fn main() -> std::io::Result<()> {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let multi = init_logging()?;
    let start_time = Utc::now();

    let tagger = init_tagger(&cli)?;

    let corpus = read_corpus(Path::new(&cli.input), cli.input_format)?;
    let tokens_count = corpus.token_count();
    println!(
        "Read {} sentences ({} tokens) from {}",
        corpus.sentences.len(),
        tokens_count,
        cli.input
    );

    let progress_bar = multi.add(create_progress_bar(corpus.sentences.len()));
    let result = process(corpus, &tagger, &progress_bar, cli.initial_only);
    progress_bar.finish_with_message("Tagging complete!");

    let end_time = Utc::now();
    let output = create_output(start_time, end_time, &cli, &tagger, tokens_count, result);
    write_output(&cli.output_file, &output)?;

    println!("JSON output written to {}", cli.output_file);
    Ok(())
}

fn init_logging() -> Result<MultiProgress, Box<dyn Error>> {
    let logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).build();
    let level = logger.filter();
    let multi = MultiProgress::new();
    LogWrapper::new(multi.clone(), logger).try_init()?;
    log::set_max_level(level);
    Ok(multi)
}

fn init_tagger(cli: &Cli) -> Result<Tagger, Box<dyn Error>> {
    let lexicon = match &cli.lexicon_dir {
        Some(dir) => Arc::new(Lexicon::from_dir(Path::new(dir))?),
        None => Lexicon::embedded(),
    };
    let rules = match &cli.rules {
        Some(path) => load_rules(Path::new(path))?.into(),
        None => default_rules(),
    };
    println!("Tagger initialized with {} contextual rules", rules.len());
    Ok(Tagger::new(lexicon, rules))
}

fn create_progress_bar(total_sentences: usize) -> ProgressBar {
    let progress_bar = ProgressBar::new(total_sentences as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} sentences tagged ({eta})")
            .expect("Failed to create progress bar style")
            .progress_chars("#>-"),
    );
    progress_bar
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    cli: &Cli,
    tagger: &Tagger,
    tokens_count: usize,
    result: ProcessResult,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    let extra_data = ExtraData {
        input_file: cli.input.clone(),
        sentences_count: result.sentences.len(),
        tokens_count,
        rules_count: tagger.rules().len(),
        initial_only: cli.initial_only,
        system_environment: SystemEnvironment {
            operating_system: sys_info::os_type().ok(),
            cpu_architecture: env::consts::ARCH.to_string(),
            platform: format!(
                "{}-{}-{}",
                sys_info::os_type().unwrap_or_else(|_| "unknown".to_string()),
                sys_info::os_release().unwrap_or_else(|_| "unknown".to_string()),
                env::consts::ARCH
            ),
            rust_version: rustc_version_runtime::version().to_string(),
        },
    };

    Output {
        headers: vec![Header {
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            extra_data,
            errors: result.errors,
            output_format_version: LEXITAG_OUTPUT_FORMAT_VERSION.to_string(),
        }],
        sentences: result.sentences,
    }
}

fn write_output(output_file: &str, output: &Output) -> std::io::Result<()> {
    let json_output = match to_string_pretty(output) {
        Ok(json) => json,
        Err(err) => return Err(std::io::Error::other(err)),
    };
    let mut file = File::create(output_file)?;
    file.write_all(json_output.as_bytes())?;
    Ok(())
}
