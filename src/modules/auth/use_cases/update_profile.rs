use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::domain::Session;
use crate::modules::auth::ports::{SessionStore, SessionStoreError};
use crate::modules::store::ports::{StoreError, UserDirectory};
use crate::modules::store::records::{User, UserPatch};
use crate::shared::validation::{Form, Rule, ValidationErrors, Value};

// ====================== Profile Update ===========================

/// Fields the profile screen may change. Everything is optional; absent
/// fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub specialty: Option<String>,
}

impl ProfileUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let name = self.name.as_deref().unwrap_or("");
        let phone = self.phone.as_deref().unwrap_or("");

        Form::new()
            .field(
                "name",
                "Full name",
                if name.is_empty() {
                    Value::Missing
                } else {
                    Value::Text(name)
                },
                vec![
                    Rule::MinLen(2, "Name must be at least 2 characters"),
                    Rule::Pattern(r"^[a-zA-Z\s]+$", "Name can only contain letters and spaces"),
                ],
            )
            .field(
                "age",
                "Age",
                self.age.map_or(Value::Missing, |a| Value::Number(a as f64)),
                vec![
                    Rule::Min(1.0, "Age must be at least 1"),
                    Rule::Max(120.0, "Age must be less than 120"),
                ],
            )
            .field(
                "phone",
                "Phone",
                if phone.is_empty() {
                    Value::Missing
                } else {
                    Value::Text(phone)
                },
                vec![
                    Rule::Pattern(r"^[0-9\-\+\(\)\s]+$", "Invalid phone number"),
                    Rule::MinLen(10, "Phone must be at least 10 digits"),
                ],
            )
            .validate()
    }

    fn as_patch(&self) -> UserPatch {
        UserPatch {
            name: self.name.clone(),
            age: self.age,
            phone: self.phone.clone(),
            allergies: self.allergies.clone(),
            medications: self.medications.clone(),
            specialty: self.specialty.clone(),
        }
    }

    /// Merge into an existing record, field by field.
    fn merged_into(&self, user: &User) -> User {
        let mut merged = user.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(age) = self.age {
            merged.age = Some(age);
        }
        if let Some(phone) = &self.phone {
            merged.phone = Some(phone.clone());
        }
        if let Some(allergies) = &self.allergies {
            merged.allergies = Some(allergies.clone());
        }
        if let Some(medications) = &self.medications {
            merged.medications = Some(medications.clone());
        }
        if let Some(specialty) = &self.specialty {
            merged.specialty = Some(specialty.clone());
        }
        merged
    }
}

// ==================== Update Profile Error =======================

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

// =================== Update Profile Use Case =====================

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    /// Patches the store, then merges the change into the session user
    /// and re-persists it. The PATCH is the only confirmation round
    /// trip there is.
    async fn execute(
        &self,
        session: &Session,
        update: ProfileUpdate,
    ) -> Result<User, UpdateProfileError>;
}

#[derive(Debug, Clone)]
pub struct UpdateProfileUseCase<D, S>
where
    D: UserDirectory,
    S: SessionStore,
{
    directory: D,
    sessions: S,
}

impl<D, S> UpdateProfileUseCase<D, S>
where
    D: UserDirectory,
    S: SessionStore,
{
    pub fn new(directory: D, sessions: S) -> Self {
        Self {
            directory,
            sessions,
        }
    }
}

#[async_trait]
impl<D, S> IUpdateProfileUseCase for UpdateProfileUseCase<D, S>
where
    D: UserDirectory,
    S: SessionStore,
{
    async fn execute(
        &self,
        session: &Session,
        update: ProfileUpdate,
    ) -> Result<User, UpdateProfileError> {
        update.validate()?;

        self.directory
            .patch_user(&session.user.id, &update.as_patch())
            .await?;

        let merged = update.merged_into(&session.user);
        self.sessions.save(&session.token, &merged)?;

        info!(user_id = %merged.id, "profile updated");
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::ports::SessionStore;
    use crate::modules::store::ports::UserFilter;
    use crate::modules::store::records::Role;
    use std::sync::Mutex;

    fn test_session() -> Session {
        Session {
            token: "tok".to_string(),
            user: User {
                id: "u-1".to_string(),
                role: Role::Patient,
                name: "Ana Silva".to_string(),
                email: "ana@example.com".to_string(),
                password: "Passw0rd".to_string(),
                age: Some(34),
                phone: None,
                allergies: Some("penicillin".to_string()),
                medications: None,
                specialty: None,
            },
        }
    }

    #[derive(Default)]
    struct MockDirectory {
        patches: Mutex<Vec<(String, serde_json::Value)>>,
        should_fail: bool,
    }

    #[async_trait]
    impl UserDirectory for MockDirectory {
        async fn find_users(&self, _filter: UserFilter) -> Result<Vec<User>, StoreError> {
            Ok(vec![])
        }

        async fn create_user(&self, user: &User) -> Result<User, StoreError> {
            Ok(user.clone())
        }

        async fn patch_user(&self, id: &str, patch: &UserPatch) -> Result<User, StoreError> {
            if self.should_fail {
                return Err(StoreError::Transport("connection refused".to_string()));
            }
            self.patches
                .lock()
                .unwrap()
                .push((id.to_string(), serde_json::to_value(patch).unwrap()));
            Ok(test_session().user)
        }
    }

    #[derive(Default)]
    struct MockSessionStore {
        saved: Mutex<Option<(String, User)>>,
    }

    impl SessionStore for MockSessionStore {
        fn save(&self, token: &str, user: &User) -> Result<(), SessionStoreError> {
            *self.saved.lock().unwrap() = Some((token.to_string(), user.clone()));
            Ok(())
        }

        fn load(&self) -> Result<Option<Session>, SessionStoreError> {
            Ok(self
                .saved
                .lock()
                .unwrap()
                .clone()
                .map(|(token, user)| Session { token, user }))
        }

        fn clear(&self) -> Result<(), SessionStoreError> {
            *self.saved.lock().unwrap() = None;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_update_patches_store_and_repersists_merged_user() {
        let use_case = UpdateProfileUseCase::new(MockDirectory::default(), MockSessionStore::default());
        let session = test_session();

        let update = ProfileUpdate {
            phone: Some("555-010-0101".to_string()),
            age: Some(35),
            ..ProfileUpdate::default()
        };

        let merged = use_case.execute(&session, update).await.unwrap();

        // Unchanged fields survive the merge.
        assert_eq!(merged.name, "Ana Silva");
        assert_eq!(merged.allergies.as_deref(), Some("penicillin"));
        // Changed fields land.
        assert_eq!(merged.age, Some(35));
        assert_eq!(merged.phone.as_deref(), Some("555-010-0101"));

        let patches = use_case.directory.patches.lock().unwrap();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].0, "u-1");
        // Only the touched fields go over the wire.
        assert_eq!(patches[0].1.as_object().unwrap().len(), 2);

        let persisted = use_case.sessions.load().unwrap().unwrap();
        assert_eq!(persisted.token, "tok");
        assert_eq!(persisted.user, merged);
    }

    #[tokio::test]
    async fn test_invalid_fields_never_reach_the_store() {
        let use_case = UpdateProfileUseCase::new(MockDirectory::default(), MockSessionStore::default());

        let update = ProfileUpdate {
            name: Some("X".to_string()),
            age: Some(200),
            ..ProfileUpdate::default()
        };

        let result = use_case.execute(&test_session(), update).await;
        let Err(UpdateProfileError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        assert!(errors.message_for("name").is_some());
        assert!(errors.message_for("age").is_some());
        assert!(use_case.directory.patches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_session_untouched() {
        let directory = MockDirectory {
            patches: Mutex::new(vec![]),
            should_fail: true,
        };
        let use_case = UpdateProfileUseCase::new(directory, MockSessionStore::default());

        let update = ProfileUpdate {
            age: Some(35),
            ..ProfileUpdate::default()
        };

        let result = use_case.execute(&test_session(), update).await;
        assert!(matches!(result, Err(UpdateProfileError::Store(_))));
        assert_eq!(use_case.sessions.load().unwrap(), None);
    }
}
