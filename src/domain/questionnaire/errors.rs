//! Questionnaire parse failure types.

use std::fmt;
use thiserror::Error;

/// A single structural problem found while parsing, with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// 1-based line number in the source document.
    pub line: usize,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ParseIssue {
    /// Creates a parse issue at the given line.
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Errors surfaced by the questionnaire loader.
///
/// Malformedness is a load failure, never a partial result: downstream
/// persona behavior depends on the document being complete.
#[derive(Debug, Clone, Error)]
pub enum QuestionnaireError {
    /// The document violates the expected heading/question/answer shape.
    #[error("malformed questionnaire: {}", format_issues(.issues))]
    Malformed { issues: Vec<ParseIssue> },
}

impl QuestionnaireError {
    /// Creates a malformed-document error from collected issues.
    pub fn malformed(issues: Vec<ParseIssue>) -> Self {
        Self::Malformed { issues }
    }

    /// Returns the collected issues.
    pub fn issues(&self) -> &[ParseIssue] {
        match self {
            Self::Malformed { issues } => issues,
        }
    }
}

fn format_issues(issues: &[ParseIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
