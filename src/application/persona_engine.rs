//! PersonaEngine - loads the questionnaire and maintains the active persona.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::persona::{PersonaProfile, PersonaSummary, SummaryOrigin};
use crate::ports::{
    PersonaSummarizer, QuestionnaireParser, QuestionnaireSource, StorageError, SummaryCache,
};

/// Loads the persona questionnaire, derives its summary, and holds the
/// resulting profile for the process lifetime.
///
/// The profile snapshot is replaced atomically on reload; readers always
/// see a complete persona.
pub struct PersonaEngine {
    source: Arc<dyn QuestionnaireSource>,
    parser: Arc<dyn QuestionnaireParser>,
    cache: Arc<dyn SummaryCache>,
    summarizer: Arc<dyn PersonaSummarizer>,
    profile: RwLock<Arc<PersonaProfile>>,
}

impl PersonaEngine {
    /// Creates an engine with a fallback profile until `load` is called.
    pub fn new(
        source: Arc<dyn QuestionnaireSource>,
        parser: Arc<dyn QuestionnaireParser>,
        cache: Arc<dyn SummaryCache>,
        summarizer: Arc<dyn PersonaSummarizer>,
    ) -> Self {
        Self {
            source,
            parser,
            cache,
            summarizer,
            profile: RwLock::new(Arc::new(PersonaProfile::fallback())),
        }
    }

    /// Returns the active persona profile.
    pub async fn profile(&self) -> Arc<PersonaProfile> {
        self.profile.read().await.clone()
    }

    /// Loads (or reloads) the questionnaire and replaces the active profile.
    ///
    /// A missing questionnaire file degrades to the stock persona. A present
    /// but malformed file is a hard load failure: partial persona data must
    /// never reach the chat path.
    pub async fn load(&self) -> Result<Arc<PersonaProfile>, DomainError> {
        if !self.source.exists().await.map_err(storage_error)? {
            warn!("questionnaire file not found, using fallback persona");
            let profile = Arc::new(PersonaProfile::fallback());
            *self.profile.write().await = profile.clone();
            return Ok(profile);
        }

        let raw_text = self.source.read().await.map_err(storage_error)?;

        let questionnaire = self.parser.parse(&raw_text).map_err(|e| {
            DomainError::new(ErrorCode::QuestionnaireMalformed, e.to_string())
                .with_detail("issues", e.issues().len().to_string())
        })?;

        let summary = self.resolve_summary(&raw_text).await;
        info!(
            entries = questionnaire.len(),
            origin = ?summary.origin(),
            "persona loaded"
        );

        let profile = Arc::new(PersonaProfile::new(questionnaire, summary));
        *self.profile.write().await = profile.clone();
        Ok(profile)
    }

    /// Serves the cached summary when the checksum matches; otherwise asks
    /// the summarizer and caches the result. Generation failures degrade to
    /// the fallback summary and are never cached.
    async fn resolve_summary(&self, raw_text: &str) -> PersonaSummary {
        let checksum = self.source.compute_checksum(raw_text);

        match self.cache.read(&checksum).await {
            Ok(Some(cached)) => {
                info!("persona summary served from cache");
                return PersonaSummary::new(cached, SummaryOrigin::Cached);
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "summary cache read failed, regenerating"),
        }

        info!("generating persona summary");
        match self.summarizer.summarize(raw_text).await {
            Ok(text) => {
                if let Err(e) = self.cache.write(&checksum, &text).await {
                    warn!(error = %e, "failed to write summary cache");
                }
                PersonaSummary::new(text, SummaryOrigin::Generated)
            }
            Err(e) => {
                warn!(error = %e, "summary generation failed, using fallback");
                PersonaSummary::fallback()
            }
        }
    }
}

fn storage_error(e: StorageError) -> DomainError {
    let code = match e {
        StorageError::NotFound(_) => ErrorCode::QuestionnaireNotFound,
        _ => ErrorCode::StorageError,
    };
    DomainError::new(code, e.to_string())
}
