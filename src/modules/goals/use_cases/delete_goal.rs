use async_trait::async_trait;
use tracing::info;

use crate::modules::goals::domain::{newest_first, Goal};
use crate::modules::goals::use_cases::GoalTrackerError;
use crate::modules::store::ports::GoalStore;

#[async_trait]
pub trait IDeleteGoalUseCase: Send + Sync {
    /// Removes one entry by id and returns the refreshed listing. The
    /// interactive confirmation happens in the view, before this runs.
    async fn execute(&self, user_id: &str, goal_id: &str) -> Result<Vec<Goal>, GoalTrackerError>;
}

#[derive(Debug, Clone)]
pub struct DeleteGoalUseCase<G>
where
    G: GoalStore,
{
    goals: G,
}

impl<G> DeleteGoalUseCase<G>
where
    G: GoalStore,
{
    pub fn new(goals: G) -> Self {
        Self { goals }
    }
}

#[async_trait]
impl<G> IDeleteGoalUseCase for DeleteGoalUseCase<G>
where
    G: GoalStore,
{
    async fn execute(&self, user_id: &str, goal_id: &str) -> Result<Vec<Goal>, GoalTrackerError> {
        self.goals.delete_goal(goal_id).await?;
        info!(goal_id, user_id, "goal deleted");

        Ok(newest_first(self.goals.goals_for(user_id).await?))
    }
}
