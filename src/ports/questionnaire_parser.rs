//! Questionnaire parser port.

use crate::domain::questionnaire::{Questionnaire, QuestionnaireError};

/// Port for converting raw questionnaire text into structured entries.
///
/// Parsing is pure and synchronous: one linear pass over the text. Either
/// the whole document parses, or the caller gets every structural problem
/// at once - never a silently truncated result.
pub trait QuestionnaireParser: Send + Sync {
    /// Parses the full document.
    fn parse(&self, content: &str) -> Result<Questionnaire, QuestionnaireError>;
}
