//! Spam types and data structures

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::SpamError;

/// Probability used for words the model has never seen
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Default decision threshold applied by result consumers
pub const DEFAULT_SPAM_THRESHOLD: f64 = 0.6;

/// Common English function words excluded from training
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "is", "in", "and", "to", "of", "a", "that", "it", "on", "for", "you", "this", "with",
    "but", "or", "not", "are", "from", "by", "as", "at", "was",
];

/// Document class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Legitimate mail
    Ham,
    /// Unsolicited mail
    Spam,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "Ham"),
            Label::Spam => write!(f, "Spam"),
        }
    }
}

impl FromStr for Label {
    type Err = SpamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ham") {
            Ok(Label::Ham)
        } else if s.eq_ignore_ascii_case("spam") {
            Ok(Label::Spam)
        } else {
            Err(SpamError::Parse(format!("unknown label '{}'", s)))
        }
    }
}

/// Word to document-occurrence count for one class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyTable {
    counts: HashMap<String, u32>,
}

impl WordFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count of a word by one
    pub fn increment(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_string(), 1);
        }
    }

    /// Count for a word, zero when absent
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

/// Number of documents ingested per class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    pub ham: u32,
    pub spam: u32,
}

impl ClassCounts {
    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Ham => self.ham += 1,
            Label::Spam => self.spam += 1,
        }
    }
}

/// Word to `P(spam | word)`, every value strictly inside (0, 1)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpamProbabilityTable {
    probabilities: HashMap<String, f64>,
}

impl SpamProbabilityTable {
    pub(crate) fn from_map(probabilities: HashMap<String, f64>) -> Self {
        Self { probabilities }
    }

    /// Spam probability of a word, [`NEUTRAL_PROBABILITY`] when unknown
    ///
    /// Lookup is case-insensitive.
    pub fn get(&self, word: &str) -> f64 {
        let found = if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.probabilities.get(&word.to_ascii_lowercase())
        } else {
            self.probabilities.get(word)
        };
        found.copied().unwrap_or(NEUTRAL_PROBABILITY)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.probabilities.contains_key(&word.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Entries ordered case-insensitively by word
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .probabilities
            .iter()
            .map(|(word, &p)| (word.as_str(), p))
            .collect();
        entries.sort_by(|a, b| {
            a.0.to_ascii_lowercase()
                .cmp(&b.0.to_ascii_lowercase())
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}

/// Words ignored while building frequency tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Build a set from custom words, normalized to lowercase
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS)
    }
}

/// Classification outcome for one test document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Document identifier (file name)
    pub document: String,
    /// Computed spam probability in [0, 1]
    pub spam_probability: f64,
    /// Ground-truth label if known
    pub actual: Option<Label>,
}

impl ClassificationRecord {
    pub fn new(document: impl Into<String>, spam_probability: f64, actual: Option<Label>) -> Self {
        Self {
            document: document.into(),
            spam_probability,
            actual,
        }
    }

    /// Predicted label under a decision threshold (inclusive)
    pub fn predicted(&self, threshold: f64) -> Label {
        if self.spam_probability >= threshold {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// Whether the prediction matches the known label
    pub fn is_correct(&self, threshold: f64) -> Option<bool> {
        self.actual.map(|actual| actual == self.predicted(threshold))
    }

    /// Probability formatted with five decimals
    pub fn rounded_probability(&self) -> String {
        format!("{:.5}", self.spam_probability)
    }
}

/// Corpus statistics after training
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub ham_files: u32,
    pub spam_files: u32,
    pub vocabulary: usize,
}
