//! spam-rs command line
//!
//! # Usage
//!
//! ```bash
//! # Train on data/train, evaluate on data/test
//! spam-rs evaluate data
//!
//! # Same, as a JSON report with a custom threshold
//! spam-rs evaluate data --threshold 0.5 --json
//!
//! # Score individual messages
//! spam-rs score data message1.eml message2.eml
//!
//! # Inspect the learned word probabilities
//! spam-rs vocabulary data --limit 50
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spam_rs::config::{Config, LoggingConfig};
use spam_rs::corpus::{CorpusLoader, SpamDetector};
use spam_rs::report::{render_table, render_vocabulary, EvaluationReport};
use spam_rs::spam::StopWordSet;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Naive Bayes email spam detector", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log format: pretty, compact or json
    #[arg(long)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on <ROOT>/train and classify <ROOT>/test
    Evaluate {
        /// Corpus root directory
        root: Option<PathBuf>,
        /// Spam probability at or above which a message is spam
        #[arg(short, long)]
        threshold: Option<f64>,
        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Train on <ROOT>/train and score the given files
    Score {
        /// Corpus root directory
        root: PathBuf,
        /// Messages to score
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Spam probability at or above which a message is spam
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Train on <ROOT>/train and print the word probability table
    Vocabulary {
        /// Corpus root directory
        root: Option<PathBuf>,
        /// Maximum number of words to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => builder.json().init(),
        "compact" => builder.compact().init(),
        _ => builder.pretty().init(),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None if std::path::Path::new("spam-rs.toml").exists() => {
            Config::from_file("spam-rs.toml").context("failed to load spam-rs.toml")?
        }
        None => Config::default(),
    };

    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }

    match &cli.command {
        Commands::Evaluate {
            root, threshold, ..
        } => {
            if let Some(root) = root {
                config.corpus.root = root.clone();
            }
            if let Some(threshold) = threshold {
                config.classifier.spam_threshold = *threshold;
            }
        }
        Commands::Score {
            root, threshold, ..
        } => {
            config.corpus.root = root.clone();
            if let Some(threshold) = threshold {
                config.classifier.spam_threshold = *threshold;
            }
        }
        Commands::Vocabulary { root, .. } => {
            if let Some(root) = root {
                config.corpus.root = root.clone();
            }
        }
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(&config.logging);
    info!("Starting spam-rs");
    info!("  Corpus root: {}", config.corpus.root.display());
    info!("  Spam threshold: {}", config.classifier.spam_threshold);

    let stop_words = match &config.classifier.stop_words {
        Some(words) => StopWordSet::from_words(words),
        None => StopWordSet::default(),
    };
    info!("  Stop words: {}", stop_words.len());
    let threshold = config.classifier.spam_threshold;

    let loader = CorpusLoader::new(config.corpus.clone());
    let detector = SpamDetector::train(&loader, stop_words)
        .await
        .context("training failed")?;

    match cli.command {
        Commands::Evaluate { json, .. } => {
            let records = detector.test(&loader).await.context("testing failed")?;
            if json {
                let report = EvaluationReport::new(detector.summary(), records, threshold);
                println!("{}", report.to_json()?);
            } else {
                print!("{}", render_table(&records, threshold));
            }
        }
        Commands::Score { files, .. } => {
            for path in files {
                let record = detector
                    .score_file(&path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?;
                println!(
                    "{}\t{}\t{}",
                    path.display(),
                    record.rounded_probability(),
                    record.predicted(threshold)
                );
            }
        }
        Commands::Vocabulary { limit, .. } => {
            print!("{}", render_vocabulary(detector.classifier().table(), limit));
        }
    }

    Ok(())
}
