use crate::error::{Result, SpamError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub classifier: ClassifierConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub root: PathBuf,
    pub train_dir: String,
    pub test_dir: String,
    pub ham_folders: Vec<String>,
    pub spam_folders: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Probability at or above which a message is reported as spam
    pub spam_threshold: f64,
    /// Replaces the built-in stop words when set
    pub stop_words: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
            train_dir: "train".to_string(),
            test_dir: "test".to_string(),
            ham_folders: vec!["ham".to_string(), "ham2".to_string()],
            spam_folders: vec!["spam".to_string()],
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            spam_threshold: 0.6,
            stop_words: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| SpamError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.classifier.spam_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SpamError::Config(format!(
                "spam_threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        if self.corpus.ham_folders.is_empty() {
            return Err(SpamError::Config("no ham folders configured".to_string()));
        }
        if self.corpus.spam_folders.is_empty() {
            return Err(SpamError::Config("no spam folders configured".to_string()));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" | "compact" => Ok(()),
            other => Err(SpamError::Config(format!(
                "unknown logging format '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classifier.spam_threshold, 0.6);
        assert_eq!(config.corpus.ham_folders, vec!["ham", "ham2"]);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [classifier]
            spam_threshold = 0.75
            "#,
        )
        .unwrap();

        assert_eq!(config.classifier.spam_threshold, 0.75);
        assert_eq!(config.corpus.train_dir, "train");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let mut config = Config::default();
        config.classifier.spam_threshold = 1.5;
        assert!(matches!(config.validate(), Err(SpamError::Config(_))));
    }

    #[test]
    fn test_empty_folders_rejected() {
        let mut config = Config::default();
        config.corpus.spam_folders.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [corpus]
            root = "/srv/corpus"
            ham_folders = ["ham"]

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.corpus.root, PathBuf::from("/srv/corpus"));
        assert_eq!(config.corpus.ham_folders, vec!["ham"]);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_from_missing_file() {
        let result = Config::from_file("/nonexistent/spam-rs.toml");
        assert!(matches!(result, Err(SpamError::Config(_))));
    }
}
