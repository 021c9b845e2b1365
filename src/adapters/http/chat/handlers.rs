//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::{ChatCommand, ChatService};
use crate::domain::foundation::SessionId;

use super::dto::{ChatRequest, ChatResponse, ResetRequest, ResetResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    service: Arc<ChatService>,
}

impl ChatHandlers {
    pub fn new(service: Arc<ChatService>) -> Self {
        Self { service }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Send a message, get the twin's reply
pub async fn chat(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let session_id = match req.session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid session ID")),
            )
                .into_response()
        }
    };

    let cmd = ChatCommand {
        session_id,
        message: req.message,
        visitor_name: req.visitor_name,
        visitor_email: req.visitor_email,
    };

    match handlers.service.handle_message(cmd).await {
        Ok(reply) => {
            let response = ChatResponse {
                session_id: reply.session_id.to_string(),
                reply: reply.reply,
                user_summary: reply.user_summary,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/reset - Clear a session's history
pub async fn reset(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ResetRequest>,
) -> Response {
    let session_id = match req.session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid session ID")),
            )
                .into_response()
        }
    };

    match handlers.service.reset(&session_id).await {
        Ok(()) => (StatusCode::OK, Json(ResetResponse::cleared())).into_response(),
        Err(e) => domain_error_response(e),
    }
}
