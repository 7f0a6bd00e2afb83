use async_trait::async_trait;
use tracing::info;

use crate::modules::goals::domain::{newest_first, Goal, GoalDraft};
use crate::modules::goals::use_cases::GoalTrackerError;
use crate::modules::store::ports::GoalStore;

#[async_trait]
pub trait IEditGoalUseCase: Send + Sync {
    /// Replaces every field of the targeted entry except its id and
    /// owner, then returns the refreshed listing.
    async fn execute(
        &self,
        user_id: &str,
        goal_id: &str,
        draft: GoalDraft,
    ) -> Result<Vec<Goal>, GoalTrackerError>;
}

#[derive(Debug, Clone)]
pub struct EditGoalUseCase<G>
where
    G: GoalStore,
{
    goals: G,
}

impl<G> EditGoalUseCase<G>
where
    G: GoalStore,
{
    pub fn new(goals: G) -> Self {
        Self { goals }
    }
}

#[async_trait]
impl<G> IEditGoalUseCase for EditGoalUseCase<G>
where
    G: GoalStore,
{
    async fn execute(
        &self,
        user_id: &str,
        goal_id: &str,
        draft: GoalDraft,
    ) -> Result<Vec<Goal>, GoalTrackerError> {
        draft.validate()?;

        self.goals.patch_goal(goal_id, &draft.as_patch()).await?;
        info!(goal_id, user_id, "goal edited");

        Ok(newest_first(self.goals.goals_for(user_id).await?))
    }
}
