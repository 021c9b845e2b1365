//! Questionnaire file source and summary cache ports.

use async_trait::async_trait;
use thiserror::Error;

/// Storage failures for questionnaire and cache files.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("io error: {0}")]
    IoError(String),
}

/// Port for reading the persona questionnaire document.
#[async_trait]
pub trait QuestionnaireSource: Send + Sync {
    /// Reads the questionnaire text.
    async fn read(&self) -> Result<String, StorageError>;

    /// Returns true if the questionnaire file exists.
    async fn exists(&self) -> Result<bool, StorageError>;

    /// Computes a checksum of document content, used as the cache key.
    fn compute_checksum(&self, content: &str) -> String;
}

/// Port for the on-disk persona summary cache.
///
/// The cache is keyed by the questionnaire checksum: a summary is only
/// served when it was generated from exactly this document revision.
#[async_trait]
pub trait SummaryCache: Send + Sync {
    /// Reads the cached summary if one exists for the given checksum.
    async fn read(&self, checksum: &str) -> Result<Option<String>, StorageError>;

    /// Writes the summary for the given checksum, replacing any prior entry.
    async fn write(&self, checksum: &str, summary: &str) -> Result<(), StorageError>;
}
