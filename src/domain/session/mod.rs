//! Chat session domain - per-visitor conversation state.

mod aggregate;

pub use aggregate::{ChatSession, ChatTurn, VisitorProfile};
