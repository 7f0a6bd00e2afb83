use tracing::info;

use crate::modules::auth::ports::{SessionStore, SessionStoreError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

pub trait ILogoutUseCase: Send + Sync {
    fn execute(&self) -> Result<(), LogoutError>;
}

/// Clears both persisted session keys. Idempotent: logging out while
/// already anonymous succeeds.
#[derive(Debug, Clone)]
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    sessions: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: S) -> Self {
        Self { sessions }
    }
}

impl<S> ILogoutUseCase for LogoutUseCase<S>
where
    S: SessionStore,
{
    fn execute(&self) -> Result<(), LogoutError> {
        self.sessions.clear()?;
        info!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::file_session::FileSessionStore;
    use crate::modules::store::records::{Role, User};

    #[test]
    fn test_logout_clears_persisted_session_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());
        let user = User {
            id: "u-1".to_string(),
            role: Role::Patient,
            name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            password: "Passw0rd".to_string(),
            age: None,
            phone: None,
            allergies: None,
            medications: None,
            specialty: None,
        };
        store.save("tok", &user).unwrap();

        let use_case = LogoutUseCase::new(store.clone());
        use_case.execute().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Second logout with nothing stored still succeeds.
        use_case.execute().unwrap();
    }
}
