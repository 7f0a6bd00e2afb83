//! The one concrete store adapter: plain HTTP against a json-server
//! style collection API. Each port operation is a single
//! request/response with no caching, retrying, or batching.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::ports::{
    CommentBoard, GoalStore, HealthTipFeed, PatientRoster, ReminderStore, StoreError,
    UserDirectory, UserFilter,
};
use super::records::{
    Goal, GoalPatch, HealthTip, PatientRecord, ProviderComment, Reminder, ReminderStatus, User,
    UserPatch,
};

#[derive(Debug, Clone)]
pub struct RestStore {
    base_url: String,
    http: Client,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        debug!(collection, params = query.len(), "listing collection");
        let response = self
            .http
            .get(self.collection_url(collection))
            .query(query)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn create<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        collection: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        debug!(collection, "creating record");
        let response = self
            .http
            .post(self.collection_url(collection))
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        debug!(collection, id, "patching record");
        let response = self
            .http
            .patch(self.record_url(collection, id))
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        debug!(collection, id, "deleting record");
        let response = self
            .http
            .delete(self.record_url(collection, id))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl UserDirectory for RestStore {
    async fn find_users(&self, filter: UserFilter) -> Result<Vec<User>, StoreError> {
        let mut query = Vec::new();
        if let Some(email) = filter.email {
            query.push(("email", email));
        }
        if let Some(password) = filter.password {
            query.push(("password", password));
        }
        if let Some(role) = filter.role {
            query.push(("role", role.to_string()));
        }
        self.list("users", &query).await
    }

    async fn create_user(&self, user: &User) -> Result<User, StoreError> {
        self.create("users", user).await
    }

    async fn patch_user(&self, id: &str, patch: &UserPatch) -> Result<User, StoreError> {
        self.patch("users", id, patch).await
    }
}

#[async_trait]
impl GoalStore for RestStore {
    async fn goals_for(&self, user_id: &str) -> Result<Vec<Goal>, StoreError> {
        self.list("goals", &[("userId", user_id.to_string())]).await
    }

    async fn create_goal(&self, goal: &Goal) -> Result<Goal, StoreError> {
        self.create("goals", goal).await
    }

    async fn patch_goal(&self, id: &str, patch: &GoalPatch) -> Result<Goal, StoreError> {
        self.patch("goals", id, patch).await
    }

    async fn delete_goal(&self, id: &str) -> Result<(), StoreError> {
        self.delete("goals", id).await
    }
}

#[async_trait]
impl ReminderStore for RestStore {
    async fn reminders_for(&self, user_id: &str) -> Result<Vec<Reminder>, StoreError> {
        self.list("reminders", &[("userId", user_id.to_string())])
            .await
    }

    async fn set_reminder_status(
        &self,
        id: &str,
        status: ReminderStatus,
    ) -> Result<Reminder, StoreError> {
        self.patch("reminders", id, &json!({ "status": status }))
            .await
    }
}

#[async_trait]
impl PatientRoster for RestStore {
    async fn patients_of(&self, provider_id: &str) -> Result<Vec<PatientRecord>, StoreError> {
        self.list("patients", &[("providerId", provider_id.to_string())])
            .await
    }

    async fn create_patient_record(
        &self,
        record: &PatientRecord,
    ) -> Result<PatientRecord, StoreError> {
        self.create("patients", record).await
    }
}

#[async_trait]
impl HealthTipFeed for RestStore {
    async fn health_tips(&self) -> Result<Vec<HealthTip>, StoreError> {
        self.list("healthTips", &[]).await
    }
}

#[async_trait]
impl CommentBoard for RestStore {
    async fn comments_for_patient(
        &self,
        patient_id: &str,
    ) -> Result<Vec<ProviderComment>, StoreError> {
        self.list("providerComments", &[("patientId", patient_id.to_string())])
            .await
    }

    async fn create_comment(
        &self,
        comment: &ProviderComment,
    ) -> Result<ProviderComment, StoreError> {
        self.create("providerComments", comment).await
    }

    async fn mark_comment_read(&self, id: &str) -> Result<ProviderComment, StoreError> {
        self.patch("providerComments", id, &json!({ "read": true }))
            .await
    }
}
