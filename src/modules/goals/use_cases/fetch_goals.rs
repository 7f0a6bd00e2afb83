use async_trait::async_trait;

use crate::modules::goals::domain::{newest_first, Goal};
use crate::modules::store::ports::{GoalStore, StoreError};

#[async_trait]
pub trait IFetchGoalsUseCase: Send + Sync {
    /// All goals logged by one patient, newest first.
    async fn execute(&self, user_id: &str) -> Result<Vec<Goal>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct FetchGoalsUseCase<G>
where
    G: GoalStore,
{
    goals: G,
}

impl<G> FetchGoalsUseCase<G>
where
    G: GoalStore,
{
    pub fn new(goals: G) -> Self {
        Self { goals }
    }
}

#[async_trait]
impl<G> IFetchGoalsUseCase for FetchGoalsUseCase<G>
where
    G: GoalStore,
{
    async fn execute(&self, user_id: &str) -> Result<Vec<Goal>, StoreError> {
        Ok(newest_first(self.goals.goals_for(user_id).await?))
    }
}
