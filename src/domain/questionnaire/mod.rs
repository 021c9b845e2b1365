//! Questionnaire domain - the persona source document as structured data.

mod document;
mod errors;

pub use document::{Questionnaire, QuestionnaireEntry};
pub use errors::{ParseIssue, QuestionnaireError};
