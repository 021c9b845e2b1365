//! Persona Twin - a digital twin chat backend.
//!
//! Loads a persona questionnaire document, derives a cached persona
//! summary, and answers visitor messages in the subject's voice over a
//! small HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
