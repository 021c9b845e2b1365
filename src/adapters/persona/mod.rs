//! Persona adapters - questionnaire storage and summary generation.

mod filesystem;
mod llm_summarizer;

pub use filesystem::{FsQuestionnaireSource, FsSummaryCache};
pub use llm_summarizer::LlmPersonaSummarizer;
