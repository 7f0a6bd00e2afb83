//! File-backed session storage: the terminal client's stand-in for
//! browser local storage. Two files in one directory, `token` and
//! `user.json`, written and removed as a pair.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use crate::modules::auth::domain::{Session, User};
use crate::modules::auth::ports::{SessionStore, SessionStoreError};

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str, user: &User) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| SessionStoreError::Io(e.to_string()))?;

        let serialized =
            serde_json::to_string(user).map_err(|e| SessionStoreError::Io(e.to_string()))?;

        // User record first: a token without a user reads back as no
        // session, the safer half-written state.
        fs::write(self.user_path(), serialized)
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;
        fs::write(self.token_path(), token).map_err(|e| SessionStoreError::Io(e.to_string()))?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let token = match fs::read_to_string(self.token_path()) {
            Ok(token) => token,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStoreError::Io(e.to_string())),
        };

        let raw_user = match fs::read_to_string(self.user_path()) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("session token present without a user record, treating as anonymous");
                return Ok(None);
            }
            Err(e) => return Err(SessionStoreError::Io(e.to_string())),
        };

        let user: User = serde_json::from_str(&raw_user)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;

        Ok(Some(Session { token, user }))
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        for path in [self.token_path(), self.user_path()] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                // Already gone keeps clear idempotent.
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(SessionStoreError::Io(e.to_string())),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::records::Role;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            role: Role::Patient,
            name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            password: "Passw0rd".to_string(),
            age: Some(34),
            phone: None,
            allergies: None,
            medications: None,
            specialty: None,
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());
        let user = sample_user();

        store.save("tok-abc", &user).unwrap();
        let session = store.load().unwrap().unwrap();

        assert_eq!(session.token, "tok-abc");
        assert_eq!(session.user, user);
    }

    #[test]
    fn test_load_without_saved_session_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_clear_removes_both_keys_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        store.save("tok-abc", &sample_user()).unwrap();
        store.clear().unwrap();

        assert!(!dir.path().join(TOKEN_FILE).exists());
        assert!(!dir.path().join(USER_FILE).exists());
        assert_eq!(store.load().unwrap(), None);

        // A second clear on an empty store still succeeds.
        store.clear().unwrap();
    }

    #[test]
    fn test_token_without_user_counts_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join(TOKEN_FILE), "orphan").unwrap();

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_user_record_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        fs::write(dir.path().join(TOKEN_FILE), "tok").unwrap();
        fs::write(dir.path().join(USER_FILE), "{ not json").unwrap();

        assert!(matches!(
            store.load(),
            Err(SessionStoreError::Corrupt(_))
        ));
    }
}
