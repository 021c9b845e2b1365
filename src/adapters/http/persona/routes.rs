//! HTTP routes for persona endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_persona, reload_persona, PersonaHandlers};

/// Creates the persona router with all endpoints.
pub fn persona_routes(handlers: PersonaHandlers) -> Router {
    Router::new()
        .route("/", get(get_persona))
        .route("/reload", post(reload_persona))
        .with_state(handlers)
}
