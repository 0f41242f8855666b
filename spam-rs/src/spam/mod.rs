//! Spam detection core
//!
//! Word-frequency Naive Bayes: a [`Trainer`] builds per-class document
//! frequencies into a [`SpamProbabilityTable`], which a [`Classifier`]
//! uses to score unseen messages.

pub mod classifier;
pub mod tokenizer;
pub mod trainer;
pub mod types;

pub use classifier::{score, Classifier};
pub use tokenizer::tokenize;
pub use trainer::Trainer;
pub use types::*;
