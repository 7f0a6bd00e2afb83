//! Outgoing ports for the backing REST store, one trait per resource
//! collection. Callers see a single generic failure kind: the store
//! either answered or it did not, and no caller is expected to
//! distinguish why (no retries, no partial-failure semantics).

use async_trait::async_trait;

use super::records::{
    Goal, GoalPatch, HealthTip, PatientRecord, ProviderComment, Reminder, ReminderStatus, Role,
    User, UserPatch,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response status: {0}")]
    Status(u16),

    #[error("malformed record: {0}")]
    Decode(String),
}

/// Equality filter over the `users` collection. Every set field becomes
/// one query parameter.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

impl UserFilter {
    pub fn credentials(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            role: None,
        }
    }

    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_users(&self, filter: UserFilter) -> Result<Vec<User>, StoreError>;
    async fn create_user(&self, user: &User) -> Result<User, StoreError>;
    async fn patch_user(&self, id: &str, patch: &UserPatch) -> Result<User, StoreError>;
}

#[async_trait]
pub trait GoalStore: Send + Sync {
    async fn goals_for(&self, user_id: &str) -> Result<Vec<Goal>, StoreError>;
    async fn create_goal(&self, goal: &Goal) -> Result<Goal, StoreError>;
    async fn patch_goal(&self, id: &str, patch: &GoalPatch) -> Result<Goal, StoreError>;
    async fn delete_goal(&self, id: &str) -> Result<(), StoreError>;
}

#[async_trait]
pub trait ReminderStore: Send + Sync {
    async fn reminders_for(&self, user_id: &str) -> Result<Vec<Reminder>, StoreError>;
    async fn set_reminder_status(
        &self,
        id: &str,
        status: ReminderStatus,
    ) -> Result<Reminder, StoreError>;
}

#[async_trait]
pub trait PatientRoster: Send + Sync {
    async fn patients_of(&self, provider_id: &str) -> Result<Vec<PatientRecord>, StoreError>;
    async fn create_patient_record(
        &self,
        record: &PatientRecord,
    ) -> Result<PatientRecord, StoreError>;
}

#[async_trait]
pub trait HealthTipFeed: Send + Sync {
    async fn health_tips(&self) -> Result<Vec<HealthTip>, StoreError>;
}

#[async_trait]
pub trait CommentBoard: Send + Sync {
    async fn comments_for_patient(
        &self,
        patient_id: &str,
    ) -> Result<Vec<ProviderComment>, StoreError>;
    async fn create_comment(
        &self,
        comment: &ProviderComment,
    ) -> Result<ProviderComment, StoreError>;
    async fn mark_comment_read(&self, id: &str) -> Result<ProviderComment, StoreError>;
}
