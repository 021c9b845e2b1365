//! ChatSession aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};

/// What the twin knows about the person it is talking to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorProfile {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl VisitorProfile {
    /// Display name for prompts; "Guest" when unknown.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Guest")
    }
}

/// One completed exchange: what the visitor asked, what the twin said.
///
/// The visitor side holds the model's summary of the message rather than the
/// verbatim text, keeping the prompt history compact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub visitor_text: String,
    pub twin_text: String,
    pub at: Timestamp,
}

/// In-memory conversation state for one visitor session.
///
/// Sessions live for the process lifetime only; there is no persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    id: SessionId,
    visitor: VisitorProfile,
    history: Vec<ChatTurn>,
    created_at: Timestamp,
}

impl ChatSession {
    /// Creates an empty session.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            visitor: VisitorProfile::default(),
            history: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    /// Returns the session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the visitor profile.
    pub fn visitor(&self) -> &VisitorProfile {
        &self.visitor
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Updates visitor identity fields that were provided.
    ///
    /// `None` leaves the existing value alone, so a visitor who gave their
    /// name once keeps it across later requests.
    pub fn update_visitor(&mut self, name: Option<String>, email: Option<String>) {
        if let Some(name) = name {
            if !name.trim().is_empty() {
                self.visitor.name = Some(name);
            }
        }
        if let Some(email) = email {
            if !email.trim().is_empty() {
                self.visitor.email = Some(email);
            }
        }
    }

    /// Appends a completed exchange.
    pub fn record_turn(&mut self, visitor_text: impl Into<String>, twin_text: impl Into<String>) {
        self.history.push(ChatTurn {
            visitor_text: visitor_text.into(),
            twin_text: twin_text.into(),
            at: Timestamp::now(),
        });
    }

    /// Returns the most recent `window` turns, oldest first.
    pub fn recent_turns(&self, window: usize) -> &[ChatTurn] {
        let start = self.history.len().saturating_sub(window);
        &self.history[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = ChatSession::new(SessionId::new());
        assert!(session.history().is_empty());
        assert_eq!(session.visitor().display_name(), "Guest");
    }

    #[test]
    fn record_turn_appends_in_order() {
        let mut session = ChatSession::new(SessionId::new());
        session.record_turn("asked about work", "I build payment rails.");
        session.record_turn("asked about hobbies", "Mostly climbing.");

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].visitor_text, "asked about work");
        assert_eq!(session.history()[1].twin_text, "Mostly climbing.");
    }

    #[test]
    fn recent_turns_windows_from_the_end() {
        let mut session = ChatSession::new(SessionId::new());
        for i in 0..10 {
            session.record_turn(format!("q{}", i), format!("a{}", i));
        }

        let recent = session.recent_turns(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].visitor_text, "q7");
        assert_eq!(recent[2].visitor_text, "q9");
    }

    #[test]
    fn recent_turns_handles_short_history() {
        let mut session = ChatSession::new(SessionId::new());
        session.record_turn("q", "a");
        assert_eq!(session.recent_turns(6).len(), 1);
    }

    #[test]
    fn update_visitor_keeps_existing_values() {
        let mut session = ChatSession::new(SessionId::new());
        session.update_visitor(Some("Maya".to_string()), None);
        session.update_visitor(None, Some("maya@example.com".to_string()));
        session.update_visitor(Some("   ".to_string()), None);

        assert_eq!(session.visitor().name.as_deref(), Some("Maya"));
        assert_eq!(session.visitor().email.as_deref(), Some("maya@example.com"));
    }
}
