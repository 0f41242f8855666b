//! spam-rs: Naive Bayes email spam detector
//!
//! Trains word-frequency tables from a labeled corpus and scores unseen
//! messages with a Laplace-smoothed, log-odds Bayesian estimator.
//!
//! # Features
//!
//! - **Tokenizer**: lowercased, alphabetic-only, de-duplicated word sets
//! - **Trainer**: per-class document frequencies and word spam probabilities
//! - **Classifier**: log-odds accumulation with a logistic transform
//! - **Corpus**: async loading of `train/` and `test/` directory trees
//! - **Report**: accuracy/precision evaluation and table or JSON output
//!
//! # Example
//!
//! ```
//! use spam_rs::spam::{Classifier, Label, Trainer};
//!
//! let mut trainer = Trainer::new();
//! trainer.ingest(Label::Ham, "hello world");
//! trainer.ingest(Label::Ham, "meeting today");
//! trainer.ingest(Label::Spam, "free money now");
//! trainer.ingest(Label::Spam, "win money free");
//!
//! let classifier = Classifier::new(trainer.finalize());
//! assert!(classifier.score("free money") > 0.5);
//! assert!(classifier.score("meeting hello") < 0.5);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`spam`]: Tokenizer, trainer and classifier
//! - [`corpus`]: Corpus loading from disk
//! - [`report`]: Evaluation and rendering of classification results

pub mod config;
pub mod corpus;
pub mod error;
pub mod report;
pub mod spam;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
