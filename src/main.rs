use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use kindling::output::{self, TableFormat};
use kindling::stopwords::aggregate::{StopwordAggregator, StopwordConfig};
use kindling::topics::extract::extract_topic_keywords;
use kindling::topics::label::auto_generate_labels;
use kindling::topics::model_file::FittedTopics;

/// Kindling: stopword curation and topic report tables for gaming comment
/// corpora.
///
/// Builds the exclusion vocabulary fed to the preprocessing pipeline, and
/// turns a fitted topic model's keyword distributions into report tables.
#[derive(Parser)]
#[command(name = "kindling", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the stopword exclusion set, or show per-category statistics
    Stopwords {
        /// Include franchise/game-name tokens (kept out by default for
        /// cross-game comparison)
        #[arg(long)]
        franchise: bool,

        /// Keep character names out of the exclusion set (for narrative
        /// analysis)
        #[arg(long)]
        no_characters: bool,

        /// Skip the general-language baseline
        #[arg(long)]
        no_baseline: bool,

        /// Show per-category statistics instead of the word list
        #[arg(long)]
        stats: bool,

        /// Write the word list to a file (one token per line) instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render a topic report table from exported topic distributions
    Report {
        /// Path to the fitted model's topics JSON export
        #[arg(long)]
        topics: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: TableFormat,

        /// Number of top keywords to show per topic
        #[arg(long, default_value = "10")]
        num_keywords: usize,

        /// Decimal places for keyword probabilities
        #[arg(long, default_value = "4")]
        decimals: usize,

        /// Interpretive label for a topic (repeat per topic, in topic order;
        /// topics beyond the supplied labels show "TBD")
        #[arg(long)]
        label: Vec<String>,

        /// Auto-generate labels from each topic's top keywords
        #[arg(long, conflicts_with = "label")]
        auto_label: bool,

        /// Number of keywords to join into an auto-generated label
        #[arg(long, default_value = "3")]
        label_words: usize,

        /// Write the table to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kindling=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stopwords {
            franchise,
            no_characters,
            no_baseline,
            stats,
            output,
        } => {
            let config = StopwordConfig {
                include_baseline: !no_baseline,
                include_franchise: franchise,
                include_characters: !no_characters,
            };
            let aggregator = StopwordAggregator::new();

            if stats {
                aggregator.category_stats(&config)?.display();
            } else {
                let mut words: Vec<String> =
                    aggregator.aggregate(&config)?.into_iter().collect();
                words.sort();
                let list = words.join("\n");

                match output {
                    Some(path) => {
                        fs::write(&path, list + "\n").with_context(|| {
                            format!("Failed to write stopword list to {}", path.display())
                        })?;
                        info!(words = words.len(), path = %path.display(), "Wrote stopword list");
                        println!("Wrote {} stopwords to {}", words.len(), path.display());
                    }
                    None => println!("{list}"),
                }
            }
        }

        Commands::Report {
            topics,
            format,
            num_keywords,
            decimals,
            label,
            auto_label,
            label_words,
            output,
        } => {
            let fitted = FittedTopics::load(&topics)?;
            let records = extract_topic_keywords(&fitted, num_keywords)?;

            let labels = if auto_label {
                Some(auto_generate_labels(&records, label_words))
            } else if label.is_empty() {
                None
            } else {
                Some(label)
            };

            let rendered = output::render(
                format,
                &records,
                labels.as_deref(),
                num_keywords,
                decimals,
            )?;

            match output {
                Some(path) => {
                    fs::write(&path, rendered + "\n")
                        .with_context(|| format!("Failed to write report to {}", path.display()))?;
                    info!(topics = records.len(), path = %path.display(), "Wrote report");
                    println!("Wrote {} topics to {}", records.len(), path.display());
                }
                None => println!("{rendered}"),
            }
        }
    }

    Ok(())
}
