//! Session store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::ChatSession;

/// Port for chat session state.
///
/// Sessions are process-lifetime only; implementations are expected to be
/// in-memory, but the chat service never assumes that.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetches the session, creating an empty one if it does not exist.
    async fn get_or_create(&self, id: &SessionId) -> Result<ChatSession, DomainError>;

    /// Persists the session state.
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError>;

    /// Removes the session. Removing a missing session is not an error.
    async fn clear(&self, id: &SessionId) -> Result<(), DomainError>;
}
