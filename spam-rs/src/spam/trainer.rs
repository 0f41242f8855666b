//! Bayesian trainer
//!
//! Accumulates per-class document frequencies and derives the word spam
//! probability table.

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use super::tokenizer::tokenize;
use super::types::*;

/// Naive Bayes trainer
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    ham_frequencies: WordFrequencyTable,
    spam_frequencies: WordFrequencyTable,
    counts: ClassCounts,
    stop_words: StopWordSet,
}

impl Trainer {
    /// Create a trainer with the default stop words
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trainer with a custom stop word set
    pub fn with_stop_words(stop_words: StopWordSet) -> Self {
        Self {
            stop_words,
            ..Self::default()
        }
    }

    /// Learn from one labeled document
    ///
    /// Every distinct non-stop word adds one to the class frequency table,
    /// and the class document count grows by one.
    pub fn ingest(&mut self, label: Label, text: &str) {
        let frequencies = match label {
            Label::Ham => &mut self.ham_frequencies,
            Label::Spam => &mut self.spam_frequencies,
        };

        for word in tokenize(text) {
            if !self.stop_words.contains(&word) {
                frequencies.increment(&word);
            }
        }

        self.counts.increment(label);
    }

    /// Compute `P(spam | word)` for every word seen in training
    ///
    /// With `h` and `s` the documents of each class containing the word,
    /// `P(w|ham) = (h + 1) / (ham_files + 1)` and
    /// `P(w|spam) = (s + 1) / (spam_files + 1)`, combined without class
    /// priors as `P(w|spam) / (P(w|spam) + P(w|ham))`.
    pub fn finalize(&self) -> SpamProbabilityTable {
        let total_ham = f64::from(self.counts.ham) + 1.0;
        let total_spam = f64::from(self.counts.spam) + 1.0;

        let vocabulary: HashSet<&str> = self
            .ham_frequencies
            .words()
            .chain(self.spam_frequencies.words())
            .collect();

        debug!(
            "Computing probabilities for {} words ({} ham / {} spam files)",
            vocabulary.len(),
            self.counts.ham,
            self.counts.spam
        );

        let mut probabilities = HashMap::with_capacity(vocabulary.len());
        for word in vocabulary {
            let p_word_ham = (f64::from(self.ham_frequencies.count(word)) + 1.0) / total_ham;
            let p_word_spam = (f64::from(self.spam_frequencies.count(word)) + 1.0) / total_spam;
            let p_spam_word = p_word_spam / (p_word_spam + p_word_ham);
            probabilities.insert(word.to_string(), p_spam_word);
        }

        info!("Probability table built with {} words", probabilities.len());

        SpamProbabilityTable::from_map(probabilities)
    }

    /// Documents ingested per class
    pub fn class_counts(&self) -> ClassCounts {
        self.counts
    }

    pub fn ham_frequencies(&self) -> &WordFrequencyTable {
        &self.ham_frequencies
    }

    pub fn spam_frequencies(&self) -> &WordFrequencyTable {
        &self.spam_frequencies
    }

    /// Number of distinct words across both classes
    pub fn vocabulary_size(&self) -> usize {
        let spam_only = self
            .spam_frequencies
            .words()
            .filter(|w| self.ham_frequencies.count(w) == 0)
            .count();
        self.ham_frequencies.len() + spam_only
    }

    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            ham_files: self.counts.ham,
            spam_files: self.counts.spam,
            vocabulary: self.vocabulary_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained() -> Trainer {
        let mut trainer = Trainer::new();
        trainer.ingest(Label::Ham, "hello world");
        trainer.ingest(Label::Ham, "meeting today");
        trainer.ingest(Label::Spam, "free money now");
        trainer.ingest(Label::Spam, "win money free");
        trainer
    }

    #[test]
    fn test_class_counts_per_document() {
        let trainer = trained();
        assert_eq!(trainer.class_counts(), ClassCounts { ham: 2, spam: 2 });
    }

    #[test]
    fn test_repeated_word_counts_once_per_document() {
        let mut trainer = Trainer::new();
        trainer.ingest(Label::Spam, "money money money MONEY");
        trainer.ingest(Label::Spam, "money");

        assert_eq!(trainer.spam_frequencies().count("money"), 2);
        assert_eq!(trainer.class_counts().spam, 2);
    }

    #[test]
    fn test_stop_words_excluded() {
        let mut trainer = Trainer::new();
        trainer.ingest(Label::Ham, "The meeting is at noon");

        let ham = trainer.ham_frequencies();
        assert_eq!(ham.count("the"), 0);
        assert_eq!(ham.count("is"), 0);
        assert_eq!(ham.count("at"), 0);
        assert_eq!(ham.count("meeting"), 1);
        assert!(!trainer.finalize().contains("the"));
    }

    #[test]
    fn test_custom_stop_words() {
        let mut trainer = Trainer::with_stop_words(StopWordSet::from_words(["Money"]));
        trainer.ingest(Label::Spam, "the money");

        assert_eq!(trainer.spam_frequencies().count("money"), 0);
        assert_eq!(trainer.spam_frequencies().count("the"), 1);
    }

    #[test]
    fn test_probability_formula() {
        let table = trained().finalize();

        // money: ham 0/2, spam 2/2 -> (1/3) vs (3/3)
        let p_ham = 1.0 / 3.0;
        let p_spam = 3.0 / 3.0;
        let expected = p_spam / (p_spam + p_ham);
        assert!((table.get("money") - expected).abs() < 1e-12);
        assert!((table.get("money") - 0.75).abs() < 1e-12);

        // hello: ham 1/2, spam 0/2 -> (2/3) vs (1/3)
        assert!((table.get("hello") - (1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_every_word_has_one_entry() {
        let trainer = trained();
        let table = trainer.finalize();

        assert_eq!(table.len(), trainer.vocabulary_size());
        for word in trainer
            .ham_frequencies()
            .words()
            .chain(trainer.spam_frequencies().words())
        {
            assert!(table.contains(word));
        }
    }

    #[test]
    fn test_probabilities_strictly_inside_unit_interval() {
        let mut trainer = Trainer::new();
        for _ in 0..500 {
            trainer.ingest(Label::Spam, "viagra lottery winner");
        }
        trainer.ingest(Label::Ham, "quarterly report");

        let table = trainer.finalize();
        for (_, p) in table.sorted() {
            assert!(p > 0.0 && p < 1.0);
        }
    }

    #[test]
    fn test_single_class_does_not_divide_by_zero() {
        let mut trainer = Trainer::new();
        trainer.ingest(Label::Spam, "free money");

        let table = trainer.finalize();
        // ham: (0+1)/1, spam: (1+1)/2
        assert!((table.get("free") - 0.5).abs() < 1e-12);
        assert!(table.get("money").is_finite());
    }

    #[test]
    fn test_empty_training_yields_empty_table() {
        let trainer = Trainer::new();
        assert!(trainer.finalize().is_empty());
        assert_eq!(trainer.summary(), TrainingSummary::default());
    }

    #[test]
    fn test_finalize_idempotent() {
        let trainer = trained();
        assert_eq!(trainer.finalize(), trainer.finalize());
    }

    #[test]
    fn test_summary() {
        let summary = trained().summary();
        assert_eq!(summary.ham_files, 2);
        assert_eq!(summary.spam_files, 2);
        // hello world meeting today free money now win
        assert_eq!(summary.vocabulary, 8);
    }
}
