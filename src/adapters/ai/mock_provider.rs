//! Mock AI Provider for testing.
//!
//! Configurable mock implementation of the AIProvider port, allowing tests
//! to run without calling a real model API.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockProvider::new()
//!     .with_response("Hello, I'm very much real!")
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// A configured mock response.
enum MockResponse {
    /// Return a successful completion.
    Success {
        content: String,
        usage: TokenUsage,
        finish_reason: FinishReason,
    },
    /// Return an error.
    Error(AIError),
}

/// Mock AI provider for testing.
///
/// Responses are consumed in FIFO order; when the queue is empty a canned
/// default response is returned. Every request is captured for assertions.
#[derive(Clone)]
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1", 128_000),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.with_response_full(content, TokenUsage::new(10, 20), FinishReason::Stop)
    }

    /// Adds a successful response with full configuration.
    pub fn with_response_full(
        self,
        content: impl Into<String>,
        usage: TokenUsage,
        finish_reason: FinishReason,
    ) -> Self {
        self.responses.lock().unwrap().push_back(MockResponse::Success {
            content: content.into(),
            usage,
            finish_reason,
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: AIError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Sets a simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns all captured requests.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns how many times complete was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AIProvider for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.calls.lock().unwrap().push(request);

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success {
                content,
                usage,
                finish_reason,
            }) => Ok(CompletionResponse {
                content,
                usage,
                model: self.info.model.clone(),
                finish_reason,
            }),
            Some(MockResponse::Error(err)) => Err(err),
            None => Ok(CompletionResponse {
                content: "mock response".to_string(),
                usage: TokenUsage::zero(),
                model: self.info.model.clone(),
                finish_reason: FinishReason::Stop,
            }),
        }
    }

    fn estimate_tokens(&self, text: &str) -> u32 {
        (text.len() / 4).max(1) as u32
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::ports::{MessageRole, RequestMetadata};

    fn test_request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(SessionId::new(), "trace"))
            .with_message(MessageRole::User, "hi")
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let provider = MockProvider::new()
            .with_response("first")
            .with_response("second");

        assert_eq!(provider.complete(test_request()).await.unwrap().content, "first");
        assert_eq!(provider.complete(test_request()).await.unwrap().content, "second");
    }

    #[tokio::test]
    async fn returns_default_when_queue_empty() {
        let provider = MockProvider::new();
        let response = provider.complete(test_request()).await.unwrap();
        assert_eq!(response.content, "mock response");
    }

    #[tokio::test]
    async fn returns_queued_errors() {
        let provider = MockProvider::new().with_error(AIError::rate_limited(5));
        let err = provider.complete(test_request()).await.unwrap_err();
        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 5 }));
    }

    #[tokio::test]
    async fn captures_calls_for_verification() {
        let provider = MockProvider::new().with_response("ok");
        provider.complete(test_request()).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.calls()[0].messages[0].content, "hi");
    }
}
