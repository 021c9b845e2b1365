//! HTTP DTOs for chat endpoints.
//!
//! These types decouple the HTTP API from domain types.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to send a message to the twin.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    pub visitor_name: Option<String>,
    pub visitor_email: Option<String>,
}

/// Request to reset a session.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetRequest {
    pub session_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The twin's reply to one message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
    pub user_summary: String,
}

/// Confirmation of a session reset.
#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub status: String,
}

impl ResetResponse {
    pub fn cleared() -> Self {
        Self {
            status: "cleared".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_deserializes_with_optional_fields_absent() {
        let body = json!({
            "session_id": "7f1c1264-5d25-4f6a-9aab-0d77b1f4ce10",
            "message": "What do you do?"
        });
        let request: ChatRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.message, "What do you do?");
        assert!(request.visitor_name.is_none());
    }

    #[test]
    fn reset_response_serializes_cleared_status() {
        let json = serde_json::to_value(ResetResponse::cleared()).unwrap();
        assert_eq!(json["status"], "cleared");
    }
}
