//! Persona profile snapshot held in memory for the process lifetime.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::questionnaire::Questionnaire;

/// Where the active summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrigin {
    /// Freshly generated by the model this run.
    Generated,
    /// Served from the on-disk cache (checksum matched).
    Cached,
    /// Stock fallback: no questionnaire, or generation failed.
    Fallback,
}

/// Condensed persona description used as the head of the system prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaSummary {
    text: String,
    origin: SummaryOrigin,
}

impl PersonaSummary {
    /// Creates a summary with the given origin.
    pub fn new(text: impl Into<String>, origin: SummaryOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    /// Stock summary used when no questionnaire is available.
    pub fn fallback() -> Self {
        Self::new(
            "A helpful professional assistant with a friendly, direct voice.",
            SummaryOrigin::Fallback,
        )
    }

    /// Returns the summary text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns where the summary came from.
    pub fn origin(&self) -> SummaryOrigin {
        self.origin
    }
}

/// Everything the chat service needs to speak as the subject.
///
/// Built once at startup (or on explicit reload) and replaced atomically;
/// never mutated in place.
#[derive(Debug, Clone)]
pub struct PersonaProfile {
    questionnaire: Questionnaire,
    summary: PersonaSummary,
    loaded_at: Timestamp,
}

impl PersonaProfile {
    /// Creates a profile from a parsed questionnaire and its summary.
    pub fn new(questionnaire: Questionnaire, summary: PersonaSummary) -> Self {
        Self {
            questionnaire,
            summary,
            loaded_at: Timestamp::now(),
        }
    }

    /// Profile used when the questionnaire file does not exist.
    pub fn fallback() -> Self {
        Self::new(Questionnaire::new(None, Vec::new()), PersonaSummary::fallback())
    }

    /// Returns the parsed questionnaire.
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Returns the active summary.
    pub fn summary(&self) -> &PersonaSummary {
        &self.summary
    }

    /// Returns when this snapshot was built.
    pub fn loaded_at(&self) -> &Timestamp {
        &self.loaded_at
    }

    /// Renders the answered fields as the detailed profile block of the
    /// system prompt. Blank answers are unspecified and never rendered.
    pub fn profile_block(&self) -> String {
        let mut out = String::new();
        let mut current_section: Option<&str> = None;

        for entry in self.questionnaire.answered() {
            if current_section != Some(entry.section.as_str()) {
                if current_section.is_some() {
                    out.push('\n');
                }
                out.push_str(&entry.section);
                out.push('\n');
                current_section = Some(&entry.section);
            }
            out.push_str("- ");
            out.push_str(entry.question.trim_end_matches(':'));
            out.push_str(": ");
            out.push_str(&entry.answer);
            out.push('\n');
        }

        out
    }
}
