use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use undertone::config::Config;
use undertone::output::terminal;
use undertone::pipeline::Analyzer;

/// Undertone: multi-engine sentiment analysis for short text.
///
/// Runs two sentiment engines, a keyword frequency ranker, and a named
/// entity recognizer over one block of text and renders the results as
/// terminal panels.
#[derive(Parser)]
#[command(name = "undertone", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full report: both sentiment engines, keywords, and entities
    Analyze {
        /// Text to analyze (falls back to --file, then stdin)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Override the configured keyword budget
        #[arg(long)]
        top: Option<usize>,

        /// Emit the report as JSON instead of panels
        #[arg(long)]
        json: bool,
    },

    /// Rank keyword frequencies only
    Keywords {
        /// Text to analyze (falls back to --file, then stdin)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// How many keywords to return (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Extract named entities only
    Entities {
        /// Text to analyze (falls back to --file, then stdin)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("undertone=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    // All models and word tables load up front; a failure here aborts
    // startup with a diagnostic rather than degrading per-request.
    let analyzer = Analyzer::load(&config)?;

    match cli.command {
        Commands::Analyze {
            text,
            file,
            top,
            json,
        } => {
            let input = read_input(text, file)?;
            if too_short(&input, &config) {
                return Ok(());
            }

            info!(chars = input.chars().count(), "analyzing submission");

            let mut report = analyzer.analyze(&input)?;
            if let Some(n) = top {
                report.keywords = analyzer.top_keywords(&input, n)?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Keywords { text, file, top } => {
            let input = read_input(text, file)?;
            if too_short(&input, &config) {
                return Ok(());
            }
            let keywords = analyzer.top_keywords(&input, top)?;
            terminal::display_keywords(&keywords);
        }

        Commands::Entities { text, file } => {
            let input = read_input(text, file)?;
            if too_short(&input, &config) {
                return Ok(());
            }
            let entities = analyzer.extract_entities(&input)?;
            terminal::display_entities(&entities);
        }
    }

    Ok(())
}

/// Resolve the input text: positional argument, then --file, then stdin.
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("reading input file {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading text from stdin")?;
    Ok(buffer)
}

/// Warn and skip analysis when the input is under the minimum length.
fn too_short(input: &str, config: &Config) -> bool {
    if input.trim().chars().count() < config.min_input_chars {
        println!(
            "{}",
            format!(
                "Please provide more text for analysis (minimum {} characters).",
                config.min_input_chars
            )
            .yellow()
        );
        return true;
    }
    false
}
