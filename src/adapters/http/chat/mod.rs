//! Chat HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ChatHandlers;
pub use routes::chat_routes;
