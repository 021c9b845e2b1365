//! Adapters - concrete implementations of the ports.

pub mod ai;
pub mod document;
pub mod http;
pub mod persona;
pub mod session;
