use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::goals::domain::{newest_first, Goal, GoalDraft};
use crate::modules::goals::use_cases::GoalTrackerError;
use crate::modules::store::ports::GoalStore;

/// Outcome of a successful log: the created entry plus the refreshed
/// tracker listing.
#[derive(Debug, Clone)]
pub struct LogGoalOutput {
    pub created: Goal,
    pub goals: Vec<Goal>,
}

#[async_trait]
pub trait ILogGoalUseCase: Send + Sync {
    async fn execute(&self, user_id: &str, draft: GoalDraft)
        -> Result<LogGoalOutput, GoalTrackerError>;
}

#[derive(Debug, Clone)]
pub struct LogGoalUseCase<G>
where
    G: GoalStore,
{
    goals: G,
}

impl<G> LogGoalUseCase<G>
where
    G: GoalStore,
{
    pub fn new(goals: G) -> Self {
        Self { goals }
    }
}

#[async_trait]
impl<G> ILogGoalUseCase for LogGoalUseCase<G>
where
    G: GoalStore,
{
    async fn execute(
        &self,
        user_id: &str,
        draft: GoalDraft,
    ) -> Result<LogGoalOutput, GoalTrackerError> {
        draft.validate()?;

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            date: draft.date,
            steps: draft.steps as u32,
            water_intake: draft.water_intake as u32,
            sleep_hours: draft.sleep_hours,
        };

        let created = self.goals.create_goal(&goal).await?;
        info!(goal_id = %created.id, user_id, "goal logged");

        // Separate round trip. When this one fails the write above
        // still happened and the screen stays stale until re-fetched.
        let goals = newest_first(self.goals.goals_for(user_id).await?);

        Ok(LogGoalOutput { created, goals })
    }
}
