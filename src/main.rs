//! Persona Twin server entry point.

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use persona_twin::adapters::ai::{AnthropicConfig, AnthropicProvider};
use persona_twin::adapters::document::MarkdownQuestionnaireParser;
use persona_twin::adapters::http::{api_router, ChatHandlers, PersonaHandlers};
use persona_twin::adapters::persona::{
    FsQuestionnaireSource, FsSummaryCache, LlmPersonaSummarizer,
};
use persona_twin::adapters::session::InMemorySessionStore;
use persona_twin::application::{ChatService, PersonaEngine};
use persona_twin::config::AppConfig;
use persona_twin::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let ai_provider: Arc<dyn AIProvider> = Arc::new(AnthropicProvider::new(
        AnthropicConfig::new(config.ai.anthropic_api_key.clone().unwrap_or_default())
            .with_model(config.ai.model.clone())
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?);

    let engine = Arc::new(PersonaEngine::new(
        Arc::new(FsQuestionnaireSource::new(&config.persona.questionnaire_path)),
        Arc::new(MarkdownQuestionnaireParser::new()),
        Arc::new(FsSummaryCache::new(&config.persona.summary_cache_path)),
        Arc::new(LlmPersonaSummarizer::new(ai_provider.clone())),
    ));

    // A malformed questionnaire is a startup failure: the twin must never
    // speak from partial persona data.
    engine.load().await?;

    let chat_service = Arc::new(ChatService::new(
        engine.clone(),
        Arc::new(InMemorySessionStore::new()),
        ai_provider,
        config.persona.history_window,
    ));

    let app = api_router(
        ChatHandlers::new(chat_service),
        PersonaHandlers::new(engine),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "persona-twin listening");

    axum::serve(listener, app).await?;

    Ok(())
}
