use async_trait::async_trait;
use futures::try_join;

use crate::modules::goals::domain::newest_first;
use crate::modules::store::ports::{GoalStore, ReminderStore, StoreError};
use crate::modules::store::records::{Goal, Reminder};

/// Everything the provider sees after selecting a patient: the goal
/// history (newest first) and the full reminder list, status included.
#[derive(Debug, Clone)]
pub struct PatientReview {
    pub goals: Vec<Goal>,
    pub reminders: Vec<Reminder>,
}

#[async_trait]
pub trait IReviewPatientUseCase: Send + Sync {
    async fn execute(&self, patient_id: &str) -> Result<PatientReview, StoreError>;
}

#[derive(Debug, Clone)]
pub struct ReviewPatientUseCase<G, R>
where
    G: GoalStore,
    R: ReminderStore,
{
    goals: G,
    reminders: R,
}

impl<G, R> ReviewPatientUseCase<G, R>
where
    G: GoalStore,
    R: ReminderStore,
{
    pub fn new(goals: G, reminders: R) -> Self {
        Self { goals, reminders }
    }
}

#[async_trait]
impl<G, R> IReviewPatientUseCase for ReviewPatientUseCase<G, R>
where
    G: GoalStore,
    R: ReminderStore,
{
    async fn execute(&self, patient_id: &str) -> Result<PatientReview, StoreError> {
        // Both fetches go out together; either failing fails the whole
        // review and any half-fetched state is dropped.
        let (goals, reminders) = try_join!(
            self.goals.goals_for(patient_id),
            self.reminders.reminders_for(patient_id),
        )?;

        Ok(PatientReview {
            goals: newest_first(goals),
            reminders,
        })
    }
}
