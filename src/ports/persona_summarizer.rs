//! Persona summarizer port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port for deriving the condensed persona summary from raw questionnaire
/// text.
///
/// The summary is deterministic per document revision from the engine's
/// point of view: it is generated once and cached by checksum, so
/// implementations may be expensive.
#[async_trait]
pub trait PersonaSummarizer: Send + Sync {
    /// Produces the summary text for the given questionnaire document.
    async fn summarize(&self, questionnaire_text: &str) -> Result<String, DomainError>;
}
