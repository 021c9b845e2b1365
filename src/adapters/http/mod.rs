//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own routes/handlers/dto triple; `api_router`
//! assembles them under `/api` with the shared middleware stack.

pub mod chat;
pub mod error;
pub mod persona;

pub use chat::{chat_routes, ChatHandlers};
pub use persona::{persona_routes, PersonaHandlers};

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assembles the full application router.
///
/// CORS is permissive: the original system served a public browser frontend
/// with no credentials of its own.
pub fn api_router(chat_handlers: ChatHandlers, persona_handlers: PersonaHandlers) -> Router {
    let api = Router::new()
        .merge(chat_routes(chat_handlers))
        .nest("/persona", persona_routes(persona_handlers));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health() -> &'static str {
    "ok"
}
