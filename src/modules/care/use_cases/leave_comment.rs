use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::modules::store::ports::{CommentBoard, StoreError};
use crate::modules::store::records::{Goal, ProviderComment, User};
use crate::shared::validation::{Form, Rule, ValidationErrors, Value};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LeaveCommentError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[async_trait]
pub trait ILeaveCommentUseCase: Send + Sync {
    /// Attaches free-text provider feedback to one specific goal entry.
    /// The comment starts unread.
    async fn execute(
        &self,
        provider: &User,
        patient_id: &str,
        goal: &Goal,
        text: &str,
    ) -> Result<ProviderComment, LeaveCommentError>;
}

#[derive(Debug, Clone)]
pub struct LeaveCommentUseCase<C>
where
    C: CommentBoard,
{
    comments: C,
}

impl<C> LeaveCommentUseCase<C>
where
    C: CommentBoard,
{
    pub fn new(comments: C) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl<C> ILeaveCommentUseCase for LeaveCommentUseCase<C>
where
    C: CommentBoard,
{
    async fn execute(
        &self,
        provider: &User,
        patient_id: &str,
        goal: &Goal,
        text: &str,
    ) -> Result<ProviderComment, LeaveCommentError> {
        Form::new()
            .field("comment", "Comment", Value::Text(text), vec![Rule::Required])
            .validate()?;

        let comment = ProviderComment {
            id: Uuid::new_v4().to_string(),
            patient_id: patient_id.to_string(),
            provider_id: provider.id.clone(),
            provider_name: provider.name.clone(),
            goal_id: goal.id.clone(),
            goal_date: goal.date,
            comment: text.trim().to_string(),
            date: Utc::now(),
            read: false,
        };

        let created = self.comments.create_comment(&comment).await?;
        info!(comment_id = %created.id, patient_id, goal_id = %goal.id, "comment left");
        Ok(created)
    }
}
