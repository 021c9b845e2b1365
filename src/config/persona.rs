//! Persona configuration.

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Persona questionnaire and summary cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonaConfig {
    /// Path to the questionnaire document.
    #[serde(default = "default_questionnaire_path")]
    pub questionnaire_path: PathBuf,

    /// Path to the summary cache file.
    #[serde(default = "default_cache_path")]
    pub summary_cache_path: PathBuf,

    /// How many recent turns are carried into each prompt.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl PersonaConfig {
    /// Validate persona configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_window == 0 {
            return Err(ValidationError::invalid_value(
                "persona.history_window",
                "window must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            questionnaire_path: default_questionnaire_path(),
            summary_cache_path: default_cache_path(),
            history_window: default_history_window(),
        }
    }
}

fn default_questionnaire_path() -> PathBuf {
    PathBuf::from("data/persona_questionnaire.md")
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("data/persona_summary.cache")
}

fn default_history_window() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_data_directory() {
        let config = PersonaConfig::default();
        assert_eq!(
            config.questionnaire_path,
            PathBuf::from("data/persona_questionnaire.md")
        );
        assert_eq!(config.history_window, 6);
    }

    #[test]
    fn zero_history_window_is_rejected() {
        let config = PersonaConfig {
            history_window: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
