use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use riksparse::{
    parse_document, process_directory, read_document, CoverageReport, DetectorConfig,
    FilterConfig, ParserConfig, SpeechCorpus,
};

#[derive(Parser)]
#[command(name = "riksparse")]
#[command(author, version, about = "Riksdag debate transcript parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a directory of raw transcripts into a speech corpus
    Parse {
        /// Directory holding raw transcript .txt files
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the speech corpus (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for the per-file coverage report (JSON)
        #[arg(long)]
        coverage: Option<PathBuf>,

        /// Minimum word count for an accepted speech
        #[arg(long, default_value = "30")]
        min_words: usize,

        /// Maximum word count for an accepted speech
        #[arg(long, default_value = "5000")]
        max_words: usize,

        /// Tail window (bytes) for the last speech of a document
        #[arg(long, default_value = "5000")]
        tail_window: usize,

        /// Distance (bytes) under which a heading marker duplicates an inline one
        #[arg(long, default_value = "5")]
        dedup_window: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse a single transcript and print its speeches
    Inspect {
        /// Raw transcript file
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            coverage,
            min_words,
            max_words,
            tail_window,
            dedup_window,
            verbose,
        } => {
            setup_logging(verbose);
            let config = ParserConfig {
                detector: DetectorConfig {
                    dedup_window,
                    ..DetectorConfig::default()
                },
                filter: FilterConfig {
                    min_words,
                    max_words,
                    ..FilterConfig::default()
                },
                tail_window,
            };
            run_parse(input, output, coverage, &config)
        }
        Commands::Inspect { input, verbose } => {
            setup_logging(verbose);
            inspect_transcript(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_parse(
    input: PathBuf,
    output: PathBuf,
    coverage: Option<PathBuf>,
    config: &ParserConfig,
) -> Result<()> {
    let result = process_directory(&input, config).context("Batch processing failed")?;

    let corpus = SpeechCorpus::from_speeches(&result.speeches);
    corpus.write_json(&output)?;
    info!("Corpus written to {:?}", output);

    let report = CoverageReport::from_outcomes(&result.outcomes);
    if let Some(coverage_path) = coverage {
        report.write_json(&coverage_path)?;
        info!("Coverage report written to {:?}", coverage_path);
    }

    info!(
        "Complete: {} speeches, {}/{} files with speeches, {} failed",
        result.speeches.len(),
        report.files_with_speeches,
        report.total_files,
        report.failed_files
    );

    Ok(())
}

fn inspect_transcript(input: PathBuf) -> Result<()> {
    let raw = read_document(&input)?;
    let parsed = parse_document(&raw, &ParserConfig::default());

    println!("Transcript Inspection");
    println!("=====================");
    println!("Document id: {}", parsed.metadata.dok_id.as_deref().unwrap_or("-"));
    println!("Date:        {}", parsed.metadata.datum.as_deref().unwrap_or("-"));
    println!("Title:       {}", parsed.metadata.titel.as_deref().unwrap_or("-"));
    println!("Session:     {}", parsed.metadata.rm.as_deref().unwrap_or("-"));
    println!();
    println!("Speeches: {}", parsed.speeches.len());
    println!();

    for (i, speech) in parsed.speeches.iter().enumerate() {
        let preview: String = speech.text.chars().take(100).collect();
        println!(
            "{}. {} ({}) - {} words",
            i + 1,
            speech.speaker,
            speech.party,
            speech.word_count
        );
        println!("   {preview}...");
        println!();
    }

    Ok(())
}
