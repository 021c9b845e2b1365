//! ChatService - answers visitor messages in the subject's voice.

use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::persona_engine::PersonaEngine;
use crate::application::prompt;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata, SessionStore,
};

/// One incoming visitor message.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub session_id: SessionId,
    pub message: String,
    pub visitor_name: Option<String>,
    pub visitor_email: Option<String>,
}

/// The twin's answer.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub session_id: SessionId,
    pub reply: String,
    pub user_summary: String,
}

/// The JSON shape the model is instructed to reply with.
#[derive(Debug, Deserialize)]
struct TwinReply {
    user_summary: Option<String>,
    response_text: Option<String>,
}

/// Orchestrates one chat turn: session state, prompt, completion, history.
pub struct ChatService {
    engine: Arc<PersonaEngine>,
    sessions: Arc<dyn SessionStore>,
    ai_provider: Arc<dyn AIProvider>,
    history_window: usize,
}

impl ChatService {
    pub fn new(
        engine: Arc<PersonaEngine>,
        sessions: Arc<dyn SessionStore>,
        ai_provider: Arc<dyn AIProvider>,
        history_window: usize,
    ) -> Self {
        Self {
            engine,
            sessions,
            ai_provider,
            history_window,
        }
    }

    /// Handles one visitor message and returns the twin's reply.
    pub async fn handle_message(&self, cmd: ChatCommand) -> Result<ChatReply, DomainError> {
        if cmd.message.trim().is_empty() {
            return Err(DomainError::validation("message", "Message cannot be empty"));
        }

        let mut session = self.sessions.get_or_create(&cmd.session_id).await?;
        session.update_visitor(cmd.visitor_name.clone(), cmd.visitor_email.clone());

        let profile = self.engine.profile().await;
        let system_prompt = prompt::system_prompt(&profile, session.visitor().display_name());

        let mut request = CompletionRequest::new(RequestMetadata::new(
            cmd.session_id,
            format!("chat-{}", uuid::Uuid::new_v4()),
        ))
        .with_system_prompt(system_prompt)
        .with_max_tokens(1024)
        .with_temperature(0.7);

        for turn in session.recent_turns(self.history_window) {
            request = request
                .with_message(MessageRole::User, turn.visitor_text.clone())
                .with_message(MessageRole::Assistant, turn.twin_text.clone());
        }
        request = request.with_message(MessageRole::User, cmd.message.clone());

        let response = self
            .ai_provider
            .complete(request)
            .await
            .map_err(ai_error)?;

        let (user_summary, reply) = parse_twin_reply(&response.content, &cmd.message);
        debug!(
            session = %cmd.session_id,
            tokens = response.usage.total_tokens,
            "chat turn completed"
        );

        session.record_turn(user_summary.clone(), reply.clone());
        self.sessions.save(&session).await?;

        Ok(ChatReply {
            session_id: cmd.session_id,
            reply,
            user_summary,
        })
    }

    /// Clears a session's history. Unknown sessions clear successfully.
    pub async fn reset(&self, session_id: &SessionId) -> Result<(), DomainError> {
        self.sessions.clear(session_id).await
    }
}

/// Extracts (user_summary, response_text) from model output.
///
/// The model is told to emit strict JSON, but real output sometimes arrives
/// wrapped in code fences or not as JSON at all. Fences are stripped before
/// the fallback so the visitor never sees markdown scaffolding.
fn parse_twin_reply(content: &str, user_message: &str) -> (String, String) {
    let trimmed = content.trim();
    let stripped = trimmed
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string();

    for candidate in [trimmed, stripped.as_str()] {
        if let Ok(parsed) = serde_json::from_str::<TwinReply>(candidate) {
            let summary = parsed
                .user_summary
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| user_message.to_string());
            let reply = parsed
                .response_text
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "I'm not sure I understood that.".to_string());
            return (summary, reply);
        }
    }

    warn!("model reply was not valid JSON, using raw text");
    (user_message.to_string(), stripped)
}

fn ai_error(err: AIError) -> DomainError {
    let code = match err {
        AIError::RateLimited { .. } => ErrorCode::RateLimited,
        _ => ErrorCode::AIProviderError,
    };
    DomainError::new(code, err.to_string())
}
