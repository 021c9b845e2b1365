//! HTTP DTOs for persona endpoints.

use serde::Serialize;

use crate::domain::persona::{PersonaProfile, SummaryOrigin};

/// Snapshot of the active persona.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaResponse {
    pub title: Option<String>,
    pub entry_count: usize,
    pub sections: Vec<String>,
    pub summary: String,
    pub summary_origin: SummaryOrigin,
}

impl From<&PersonaProfile> for PersonaResponse {
    fn from(profile: &PersonaProfile) -> Self {
        Self {
            title: profile.questionnaire().title().map(String::from),
            entry_count: profile.questionnaire().len(),
            sections: profile
                .questionnaire()
                .sections()
                .into_iter()
                .map(String::from)
                .collect(),
            summary: profile.summary().text().to_string(),
            summary_origin: profile.summary().origin(),
        }
    }
}

/// Result of a persona reload.
#[derive(Debug, Clone, Serialize)]
pub struct ReloadResponse {
    pub entry_count: usize,
    pub summary_origin: SummaryOrigin,
    pub message: String,
}
