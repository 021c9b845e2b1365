//! Filesystem adapters for the questionnaire file and the summary cache.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{QuestionnaireSource, StorageError, SummaryCache};

/// Reads the persona questionnaire from a fixed path.
pub struct FsQuestionnaireSource {
    path: PathBuf,
}

impl FsQuestionnaireSource {
    /// Creates a source for the given questionnaire path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the configured path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionnaireSource for FsQuestionnaireSource {
    async fn read(&self) -> Result<String, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::NotFound(format!(
                "questionnaire not found at {}",
                self.path.display()
            )));
        }

        fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                StorageError::PermissionDenied(format!("cannot read questionnaire: {}", e))
            } else {
                StorageError::IoError(format!("failed to read questionnaire: {}", e))
            }
        })
    }

    async fn exists(&self) -> Result<bool, StorageError> {
        Ok(self.path.exists())
    }

    fn compute_checksum(&self, content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// On-disk summary cache.
///
/// File layout: first line is the questionnaire checksum the summary was
/// generated from, everything after it is the summary text. Writes go
/// through a temp file and rename so a crash never leaves a torn cache.
pub struct FsSummaryCache {
    path: PathBuf,
}

impl FsSummaryCache {
    /// Creates a cache at the given path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn ensure_dir_exists(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::IoError(format!("failed to create directory: {}", e)))?;
        }
        Ok(())
    }
}

#[async_trait]
impl SummaryCache for FsSummaryCache {
    async fn read(&self, checksum: &str) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::IoError(format!("failed to read cache: {}", e)))?;

        match content.split_once('\n') {
            Some((cached_checksum, summary)) if cached_checksum.trim() == checksum => {
                Ok(Some(summary.trim().to_string()))
            }
            // Stale or unrecognized cache content is a miss, not an error.
            _ => Ok(None),
        }
    }

    async fn write(&self, checksum: &str, summary: &str) -> Result<(), StorageError> {
        self.ensure_dir_exists().await?;

        let content = format!("{}\n{}", checksum, summary);
        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, content)
            .await
            .map_err(|e| StorageError::IoError(format!("failed to write temporary cache: {}", e)))?;

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::IoError(format!("failed to rename cache: {}", e)))?;

        Ok(())
    }
}
