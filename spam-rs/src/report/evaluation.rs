//! Evaluation statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::spam::{ClassificationRecord, Label, TrainingSummary};

/// Confusion counts over a set of classification records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Records evaluated
    pub total: usize,
    /// Records whose prediction matched the known label
    pub correct: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl Evaluation {
    /// Tally records predicted as spam when `spam_probability >= threshold`
    ///
    /// Records without a known label count toward `total` only.
    pub fn from_records(records: &[ClassificationRecord], threshold: f64) -> Self {
        let mut evaluation = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            let Some(actual) = record.actual else {
                continue;
            };
            if record.is_correct(threshold) == Some(true) {
                evaluation.correct += 1;
            }
            match (actual, record.predicted(threshold)) {
                (Label::Spam, Label::Spam) => evaluation.true_positives += 1,
                (Label::Ham, Label::Spam) => evaluation.false_positives += 1,
                (Label::Ham, Label::Ham) => evaluation.true_negatives += 1,
                (Label::Spam, Label::Ham) => evaluation.false_negatives += 1,
            }
        }

        evaluation
    }

    /// Correct predictions over all records
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.correct, self.total)
    }

    /// True positives over predicted positives
    pub fn precision(&self) -> Option<f64> {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    /// True positives over actual positives
    pub fn recall(&self) -> Option<f64> {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// Full result of a train/test run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub generated_at: DateTime<Utc>,
    pub threshold: f64,
    pub training: TrainingSummary,
    pub records: Vec<ClassificationRecord>,
    pub evaluation: Evaluation,
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
}

impl EvaluationReport {
    pub fn new(
        training: TrainingSummary,
        records: Vec<ClassificationRecord>,
        threshold: f64,
    ) -> Self {
        let evaluation = Evaluation::from_records(&records, threshold);
        Self {
            generated_at: Utc::now(),
            threshold,
            training,
            accuracy: evaluation.accuracy(),
            precision: evaluation.precision(),
            recall: evaluation.recall(),
            records,
            evaluation,
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
