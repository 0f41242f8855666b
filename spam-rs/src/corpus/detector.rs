use crate::error::Result;
use crate::spam::{ClassificationRecord, Classifier, StopWordSet, Trainer, TrainingSummary};
use std::path::Path;
use tracing::info;

use super::loader::CorpusLoader;

/// A classifier trained from an on-disk corpus
pub struct SpamDetector {
    classifier: Classifier,
    summary: TrainingSummary,
}

impl SpamDetector {
    /// Train on every document of the corpus training directory
    pub async fn train(loader: &CorpusLoader, stop_words: StopWordSet) -> Result<Self> {
        info!("Training spam detector from {}", loader.root().display());

        let mut trainer = Trainer::with_stop_words(stop_words);
        for document in loader.load_training().await? {
            trainer.ingest(document.label, &document.text);
        }

        let summary = trainer.summary();
        info!(
            "Training summary: {} ham files, {} spam files, {} unique words",
            summary.ham_files, summary.spam_files, summary.vocabulary
        );

        Ok(Self {
            classifier: Classifier::new(trainer.finalize()),
            summary,
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn summary(&self) -> TrainingSummary {
        self.summary
    }

    /// Classify every document of the corpus test directory
    pub async fn test(&self, loader: &CorpusLoader) -> Result<Vec<ClassificationRecord>> {
        let records: Vec<ClassificationRecord> = loader
            .load_test()
            .await?
            .into_iter()
            .map(|doc| self.classifier.classify(doc.id, &doc.text, Some(doc.label)))
            .collect();

        info!("Total test files processed: {}", records.len());
        Ok(records)
    }

    /// Classify a single file without ground truth
    pub async fn score_file(&self, path: &Path) -> Result<ClassificationRecord> {
        let bytes = tokio::fs::read(path).await?;
        let text = String::from_utf8_lossy(&bytes);
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(self.classifier.classify(id, &text, None))
    }
}
