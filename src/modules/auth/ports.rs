//! Outgoing port for durable session storage.

use super::domain::{Session, User};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session storage failed: {0}")]
    Io(String),

    #[error("stored session is corrupt: {0}")]
    Corrupt(String),
}

/// Durable client-side storage holding exactly two keys: the session
/// token and the serialized current-user record. The two are always
/// written and cleared together; a store with only one of them present
/// counts as no session.
///
/// Restore happens synchronously at startup, so this port is not async.
pub trait SessionStore: Send + Sync {
    fn save(&self, token: &str, user: &User) -> Result<(), SessionStoreError>;
    fn load(&self) -> Result<Option<Session>, SessionStoreError>;
    fn clear(&self) -> Result<(), SessionStoreError>;
}
