use async_trait::async_trait;
use tracing::info;

use crate::modules::store::ports::{CommentBoard, StoreError};
use crate::modules::store::records::ProviderComment;

#[async_trait]
pub trait IMarkCommentReadUseCase: Send + Sync {
    /// Flips `read` false to true. Marking an already-read comment is a
    /// local no-op, which also keeps the flag from ever moving back.
    async fn execute(&self, comment: &ProviderComment) -> Result<ProviderComment, StoreError>;
}

#[derive(Debug, Clone)]
pub struct MarkCommentReadUseCase<C>
where
    C: CommentBoard,
{
    comments: C,
}

impl<C> MarkCommentReadUseCase<C>
where
    C: CommentBoard,
{
    pub fn new(comments: C) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl<C> IMarkCommentReadUseCase for MarkCommentReadUseCase<C>
where
    C: CommentBoard,
{
    async fn execute(&self, comment: &ProviderComment) -> Result<ProviderComment, StoreError> {
        if comment.read {
            return Ok(comment.clone());
        }

        let updated = self.comments.mark_comment_read(&comment.id).await?;
        info!(comment_id = %comment.id, "comment marked read");
        Ok(updated)
    }
}
