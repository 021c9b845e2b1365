//! HTTP handlers for persona endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::PersonaEngine;

use super::dto::{PersonaResponse, ReloadResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PersonaHandlers {
    engine: Arc<PersonaEngine>,
}

impl PersonaHandlers {
    pub fn new(engine: Arc<PersonaEngine>) -> Self {
        Self { engine }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/persona - Active persona snapshot
pub async fn get_persona(State(handlers): State<PersonaHandlers>) -> Response {
    let profile = handlers.engine.profile().await;
    let response = PersonaResponse::from(profile.as_ref());
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/persona/reload - Re-read the questionnaire and rebuild the persona
pub async fn reload_persona(State(handlers): State<PersonaHandlers>) -> Response {
    match handlers.engine.load().await {
        Ok(profile) => {
            let response = ReloadResponse {
                entry_count: profile.questionnaire().len(),
                summary_origin: profile.summary().origin(),
                message: "Persona reloaded".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
