//! HTTP routes for chat endpoints.

use axum::{routing::post, Router};

use super::handlers::{chat, reset, ChatHandlers};

/// Creates the chat router with all endpoints.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/reset", post(reset))
        .with_state(handlers)
}
