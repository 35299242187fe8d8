//! # docsim CLI
//!
//! Command-line interface for docsim, the document similarity checker.
//!
//! ## Commands
//!
//! - `docsim check <FILE>` - Rank the corpus against a query document
//! - `docsim add <FILE>` - Copy a document into the corpus
//!
//! ## Examples
//!
//! ```bash
//! # Compare an essay against the default corpus (~/Desktop/Work)
//! docsim check ~/essays/draft.docx
//!
//! # Use a different corpus and JSON output
//! docsim check draft.txt --corpus ./submissions --format json
//!
//! # Add the essay to the corpus for future checks
//! docsim add ~/essays/draft.docx
//! ```
//!
//! The CLI is presentation only: it renders the records the library
//! returns and never reorders them. Failures that concern a single
//! request print as notices; the process itself does not crash on bad
//! input files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use docsim::{add_to_corpus, check_document, default_corpus_dir, CheckConfig, ScanReport};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "docsim")]
#[command(about = "Rank a corpus of documents by similarity to a query document")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a document against every file in the corpus directory
    Check {
        /// Document to check
        file: PathBuf,

        /// Corpus directory (default: ~/Desktop/Work)
        #[arg(short, long)]
        corpus: Option<PathBuf>,

        /// Extract candidates the same way as the query instead of
        /// reading their raw bytes
        #[arg(long)]
        extract_candidates: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Copy a document into the corpus directory
    Add {
        /// Document to add
        file: PathBuf,

        /// Corpus directory (default: ~/Desktop/Work)
        #[arg(short, long)]
        corpus: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            file,
            corpus,
            extract_candidates,
            format,
        } => {
            let config = CheckConfig {
                corpus_dir: corpus.unwrap_or_else(default_corpus_dir),
                extract_candidates,
            };
            let report = check_document(&file, config)?;
            render_report(&report, format)?;
            Ok(())
        }
        Commands::Add { file, corpus } => {
            let corpus_dir = corpus.unwrap_or_else(default_corpus_dir);
            let dest = add_to_corpus(&file, &corpus_dir)?;
            println!("added {}", dest.display());
            Ok(())
        }
    }
}

fn render_report(report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            if report.results.is_empty() {
                println!("no candidates scored");
            } else {
                println!("{:<40} {:>12}  {}", "File", "% Similar", "Path");
                for record in &report.results {
                    println!(
                        "{:<40} {:>12}  {}",
                        record.display_name,
                        record.similarity.to_string(),
                        record.path.display()
                    );
                }
            }
            if report.skipped > 0 {
                println!("{} candidate(s) skipped", report.skipped);
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
