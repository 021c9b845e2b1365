//! Ports - trait seams between the application core and the outside world.

mod ai_provider;
mod persona_summarizer;
mod questionnaire_parser;
mod questionnaire_source;
mod session_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use persona_summarizer::PersonaSummarizer;
pub use questionnaire_parser::QuestionnaireParser;
pub use questionnaire_source::{QuestionnaireSource, StorageError, SummaryCache};
pub use session_store::SessionStore;
