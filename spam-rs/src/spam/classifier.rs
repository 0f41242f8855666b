//! Log-odds classifier
//!
//! Scores a message against a trained [`SpamProbabilityTable`].

use std::sync::Arc;

use super::tokenizer::tokenize;
use super::types::*;

/// Spam probability of a message under a probability table
///
/// Sums `ln(1 - p) - ln(p)` over the message's distinct words, unknown words
/// counting as 0.5, and maps the total through `1 / (1 + e^eta)`. Stop words
/// are not filtered here. An empty message scores exactly 0.5.
pub fn score(text: &str, table: &SpamProbabilityTable) -> f64 {
    let eta: f64 = tokenize(text)
        .iter()
        .map(|word| {
            let p = table.get(word);
            (1.0 - p).ln() - p.ln()
        })
        .sum();

    1.0 / (1.0 + eta.exp())
}

/// Classifier over a finalized probability table
///
/// Cheap to clone; clones share the table.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: Arc<SpamProbabilityTable>,
}

impl Classifier {
    pub fn new(table: SpamProbabilityTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &SpamProbabilityTable {
        &self.table
    }

    /// Spam probability of a message in [0, 1]
    pub fn score(&self, text: &str) -> f64 {
        score(text, &self.table)
    }

    /// Score a document into a classification record
    pub fn classify(
        &self,
        document: impl Into<String>,
        text: &str,
        actual: Option<Label>,
    ) -> ClassificationRecord {
        ClassificationRecord::new(document, self.score(text), actual)
    }
}
