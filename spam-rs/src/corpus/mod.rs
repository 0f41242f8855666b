//! Corpus loading
//!
//! Reads labeled documents from a directory tree laid out as
//! `<root>/train/{ham,ham2,spam}/*` and `<root>/test/{ham,spam}/*`, and
//! drives training and evaluation of a [`SpamDetector`].

pub mod detector;
pub mod loader;

pub use detector::SpamDetector;
pub use loader::{CorpusLoader, LabeledDocument};
