use crate::config::CorpusConfig;
use crate::error::{Result, SpamError};
use crate::spam::Label;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// A document read from the corpus with its class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledDocument {
    /// File name within its folder
    pub id: String,
    pub label: Label,
    pub text: String,
}

/// Reads labeled documents from a `train/` and `test/` directory tree
pub struct CorpusLoader {
    config: CorpusConfig,
}

impl CorpusLoader {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Load every training document
    ///
    /// Ham folders and spam folders are matched case-insensitively inside
    /// the training directory. A missing training directory or folder
    /// contributes no documents.
    pub async fn load_training(&self) -> Result<Vec<LabeledDocument>> {
        let train_dir = self.config.root.join(&self.config.train_dir);
        if !self.dir_exists(&train_dir).await? {
            return Ok(Vec::new());
        }
        info!("Training directory: {}", train_dir.display());

        let mut documents = Vec::new();
        let mut seen = Vec::new();
        for folder in &self.config.ham_folders {
            self.load_labeled(&train_dir, folder, Label::Ham, &mut seen, &mut documents)
                .await?;
        }
        for folder in &self.config.spam_folders {
            self.load_labeled(&train_dir, folder, Label::Spam, &mut seen, &mut documents)
                .await?;
        }

        Ok(documents)
    }

    /// Load every test document from the `ham` and `spam` folders
    ///
    /// A missing test directory yields no documents.
    pub async fn load_test(&self) -> Result<Vec<LabeledDocument>> {
        let test_dir = self.config.root.join(&self.config.test_dir);
        if !self.dir_exists(&test_dir).await? {
            return Ok(Vec::new());
        }
        info!("Test directory: {}", test_dir.display());

        let mut documents = Vec::new();
        let mut seen = Vec::new();
        self.load_labeled(&test_dir, "ham", Label::Ham, &mut seen, &mut documents)
            .await?;
        self.load_labeled(&test_dir, "spam", Label::Spam, &mut seen, &mut documents)
            .await?;

        Ok(documents)
    }

    /// Whether a corpus directory is present
    ///
    /// A missing directory is reported and treated as holding no documents.
    async fn dir_exists(&self, dir: &Path) -> Result<bool> {
        match fs::metadata(dir).await {
            Ok(meta) if meta.is_dir() => Ok(true),
            Ok(_) => Err(SpamError::Corpus(format!(
                "{} is not a directory",
                dir.display()
            ))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Directory {} not found, no documents loaded", dir.display());
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn load_labeled(
        &self,
        parent: &Path,
        folder: &str,
        label: Label,
        seen: &mut Vec<PathBuf>,
        documents: &mut Vec<LabeledDocument>,
    ) -> Result<()> {
        let Some(dir) = find_folder(parent, folder).await? else {
            warn!(
                "Folder '{}' not found in {}",
                folder,
                parent.display()
            );
            return Ok(());
        };

        if seen.contains(&dir) {
            debug!("Folder {} already loaded, skipping", dir.display());
            return Ok(());
        }
        seen.push(dir.clone());

        let before = documents.len();
        for (id, text) in read_documents(&dir).await? {
            documents.push(LabeledDocument { id, label, text });
        }

        let count = documents.len() - before;
        if count == 0 {
            warn!("Empty directory - {}", dir.display());
        } else {
            info!("Processed {} {} files from {}", count, label, dir.display());
        }
        Ok(())
    }
}

/// Locate a child directory by case-insensitive name
async fn find_folder(parent: &Path, name: &str) -> Result<Option<PathBuf>> {
    let exact = parent.join(name);
    if fs::metadata(&exact).await.map(|m| m.is_dir()).unwrap_or(false) {
        return Ok(Some(exact));
    }

    let mut entries = fs::read_dir(parent).await?;
    while let Some(entry) = entries.next_entry().await? {
        let matches = entry
            .file_name()
            .to_str()
            .map(|n| n.eq_ignore_ascii_case(name))
            .unwrap_or(false);
        if matches && entry.file_type().await?.is_dir() {
            return Ok(Some(entry.path()));
        }
    }

    Ok(None)
}

/// Read every regular file of a directory, sorted by file name
///
/// Unreadable files are skipped. Content is decoded as lossy UTF-8.
async fn read_documents(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut paths = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => paths.push(path),
            Ok(_) => debug!("Skipping non-file entry {}", path.display()),
            Err(e) => warn!("Cannot stat {}: {}", path.display(), e),
        }
    }
    paths.sort();
    debug!("Found {} files in {}", paths.len(), dir.display());

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match fs::read(&path).await {
            Ok(bytes) => documents.push((id, String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) => warn!("Skipping unreadable file {}: {}", path.display(), e),
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(dir.join(name), content).unwrap();
    }

    fn loader(root: &Path) -> CorpusLoader {
        CorpusLoader::new(CorpusConfig {
            root: root.to_path_buf(),
            ..CorpusConfig::default()
        })
    }

    #[tokio::test]
    async fn test_load_training_labels() {
        let tmp = tempfile::tempdir().unwrap();
        let train = tmp.path().join("train");
        write(&train.join("ham"), "h1", "hello world");
        write(&train.join("ham2"), "h2", "meeting today");
        write(&train.join("spam"), "s1", "free money");

        let docs = loader(tmp.path()).load_training().await.unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs.iter().filter(|d| d.label == Label::Ham).count(), 2);
        assert_eq!(docs.iter().filter(|d| d.label == Label::Spam).count(), 1);
    }

    #[tokio::test]
    async fn test_folder_names_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        let train = tmp.path().join("train");
        write(&train.join("HAM2"), "h1", "hello");
        write(&train.join("Spam"), "s1", "money");

        let docs = loader(tmp.path()).load_training().await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].label, Label::Ham);
        assert_eq!(docs[1].label, Label::Spam);
    }

    #[tokio::test]
    async fn test_missing_folder_is_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("train").join("spam"), "s1", "money");

        let docs = loader(tmp.path()).load_training().await.unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_corpus_dirs_yield_no_documents() {
        let tmp = tempfile::tempdir().unwrap();
        let loader = loader(tmp.path());

        assert!(loader.load_training().await.unwrap().is_empty());
        assert!(loader.load_test().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_train_path_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("train"), "not a folder").unwrap();

        let result = loader(tmp.path()).load_training().await;
        assert!(matches!(result, Err(SpamError::Corpus(_))));
    }

    #[tokio::test]
    async fn test_documents_sorted_and_subdirs_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let ham = tmp.path().join("test").join("ham");
        write(&ham, "b.txt", "second");
        write(&ham, "a.txt", "first");
        std::fs::create_dir_all(ham.join("nested")).unwrap();

        let docs = loader(tmp.path()).load_test().await.unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a.txt", "b.txt"]);
        assert_eq!(docs[0].text, "first");
    }

    #[tokio::test]
    async fn test_invalid_utf8_decoded_lossily() {
        let tmp = tempfile::tempdir().unwrap();
        let spam = tmp.path().join("test").join("spam");
        std::fs::create_dir_all(&spam).unwrap();
        std::fs::write(spam.join("bin"), [b'w', b'i', b'n', 0xff, b' ', b'n', b'o', b'w']).unwrap();

        let docs = loader(tmp.path()).load_test().await.unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].text.starts_with("win"));
        assert_eq!(docs[0].label, Label::Spam);
    }
}
