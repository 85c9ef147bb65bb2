use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use papertag::config::Config;
use papertag::extract::textrank::TextRankAnalyzer;
use papertag::extract::traits::DocumentAnalyzer;
use papertag::hierarchy::cache::IndexCache;
use papertag::matching::engine::match_subjects;
use papertag::matching::MatchThresholds;
use papertag::output::terminal;

/// Papertag: subject-tag suggestions for conference papers.
///
/// Matches document text against the controlled hierarchical subject
/// dictionary and suggests which subjects apply, plus free-text key phrases
/// worth adding to the dictionary. Input is assumed to be plain text (run
/// detex first on TeX sources).
#[derive(Parser)]
#[command(name = "papertag", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest dictionary subjects and new key phrases for a document
    Suggest {
        /// Text file to analyze (defaults to standard input)
        file: Option<PathBuf>,

        /// Emit JSON instead of formatted terminal output
        #[arg(long)]
        json: bool,

        /// Maximum number of suggested key phrases
        #[arg(long, default_value = "15")]
        max_keyphrases: usize,

        /// Minimum occurrences before a document ngram is considered
        #[arg(long, default_value = "2")]
        min_frequency: u32,

        /// Corroborating ngrams required (strictly more) for a strong suggestion
        #[arg(long, default_value = "3")]
        min_corroboration: u32,
    },

    /// Show the extracted term frequencies and key phrases only
    Terms {
        /// Text file to analyze (defaults to standard input)
        file: Option<PathBuf>,

        /// Emit JSON instead of formatted terminal output
        #[arg(long)]
        json: bool,

        /// How many top terms to show
        #[arg(long, default_value = "30")]
        top: usize,

        /// Maximum number of suggested key phrases
        #[arg(long, default_value = "15")]
        max_keyphrases: usize,
    },

    /// Compile the subject dictionary and show index statistics
    Dict {
        /// Emit JSON instead of formatted terminal output
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("papertag=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    // One compile cache for the process lifetime; dictionary edits require
    // a new run.
    let cache = IndexCache::new();

    match cli.command {
        Commands::Suggest {
            file,
            json,
            max_keyphrases,
            min_frequency,
            min_corroboration,
        } => {
            let text = read_input(file.as_deref())?;
            let index = cache.get_or_compile(&config.dict_root, &config.dict_sources)?;

            let analyzer = TextRankAnalyzer::default();
            let stats = analyzer.analyze(&text, max_keyphrases)?;

            let thresholds = MatchThresholds {
                min_frequency,
                min_corroboration,
            };
            let outcome = match_subjects(&index, &stats, &thresholds);

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                terminal::display_suggestions(&outcome);
            }
        }

        Commands::Terms {
            file,
            json,
            top,
            max_keyphrases,
        } => {
            let text = read_input(file.as_deref())?;
            let analyzer = TextRankAnalyzer::default();
            let mut stats = analyzer.analyze(&text, max_keyphrases)?;

            if json {
                stats.ngrams.truncate(top);
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                terminal::display_term_table(&stats, top);
            }
        }

        Commands::Dict { json } => {
            let index = cache.get_or_compile(&config.dict_root, &config.dict_sources)?;
            info!(
                terms = index.term_count(),
                paths = index.path_count(),
                "dictionary compiled"
            );

            if json {
                let summary = serde_json::json!({
                    "sources": config.dict_sources,
                    "terms": index.term_count(),
                    "paths": index.path_count(),
                    "max_depth": index.max_depth(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                terminal::display_dict_stats(&index, &config.dict_sources);
            }
        }
    }

    Ok(())
}

/// Read the document text from a file, or from stdin when no file is given.
fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read document text from stdin")?;
            Ok(text)
        }
    }
}
