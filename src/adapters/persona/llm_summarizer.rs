//! AI-powered persona summarizer implementation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{
    AIProvider, CompletionRequest, MessageRole, PersonaSummarizer, RequestMetadata,
};

/// Derives the persona summary by asking the model to condense the raw
/// questionnaire into the three sections the system prompt leads with.
pub struct LlmPersonaSummarizer {
    ai_provider: Arc<dyn AIProvider>,
}

impl LlmPersonaSummarizer {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    /// Summarization is not tied to any visitor conversation.
    fn summarize_metadata(&self) -> RequestMetadata {
        RequestMetadata::new(
            SessionId::new(),
            format!("persona-summary-{}", uuid::Uuid::new_v4()),
        )
    }

    fn summary_prompt(&self, questionnaire_text: &str) -> String {
        format!(
            r#"Analyze this raw questionnaire and produce a strict three-section summary of the person it describes.

RAW TEXT:
{}

OUTPUT FORMAT:
=== CORE IDENTITY ===
(Who they are, values, direction)

=== VOICE & TONE ===
(Speaking style, energy, culture, slang usage)

=== DO & DON'T ===
(Expert topics vs caution topics)

Blank fields in the raw text mean the subject left them unspecified; do not invent content for them."#,
            questionnaire_text
        )
    }
}

#[async_trait]
impl PersonaSummarizer for LlmPersonaSummarizer {
    async fn summarize(&self, questionnaire_text: &str) -> Result<String, DomainError> {
        let request = CompletionRequest::new(self.summarize_metadata())
            .with_message(MessageRole::User, self.summary_prompt(questionnaire_text))
            .with_max_tokens(1024)
            .with_temperature(0.2);

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            DomainError::new(
                ErrorCode::AIProviderError,
                format!("summary generation failed: {}", e),
            )
        })?;

        let summary = response.content.trim().to_string();
        if summary.is_empty() {
            return Err(DomainError::new(
                ErrorCode::AIProviderError,
                "summary generation returned empty content",
            ));
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockProvider;

    #[tokio::test]
    async fn summarize_returns_model_content() {
        let provider = Arc::new(MockProvider::new().with_response("=== CORE IDENTITY ===\nA builder."));
        let summarizer = LlmPersonaSummarizer::new(provider.clone());

        let summary = summarizer.summarize("## A\n\n**Q:**\n→ answer\n").await.unwrap();
        assert!(summary.starts_with("=== CORE IDENTITY ==="));

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].messages[0].content.contains("**Q:**"));
    }

    #[tokio::test]
    async fn summarize_maps_provider_failure_to_domain_error() {
        let provider = Arc::new(
            MockProvider::new().with_error(crate::ports::AIError::unavailable("down")),
        );
        let summarizer = LlmPersonaSummarizer::new(provider);

        let err = summarizer.summarize("text").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::AIProviderError);
    }

    #[tokio::test]
    async fn summarize_rejects_empty_model_output() {
        let provider = Arc::new(MockProvider::new().with_response("   "));
        let summarizer = LlmPersonaSummarizer::new(provider);

        let err = summarizer.summarize("text").await.unwrap_err();
        assert!(err.message().contains("empty"));
    }
}
