//! Persona HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PersonaHandlers;
pub use routes::persona_routes;
