use async_trait::async_trait;
use tracing::info;

use crate::modules::store::ports::{ReminderStore, StoreError};
use crate::modules::store::records::{Reminder, ReminderStatus};

#[async_trait]
pub trait ICompleteReminderUseCase: Send + Sync {
    /// Marks a preventive-care reminder completed. Reminder status is
    /// provider-managed; patients only ever read it.
    async fn execute(&self, reminder_id: &str) -> Result<Reminder, StoreError>;
}

#[derive(Debug, Clone)]
pub struct CompleteReminderUseCase<R>
where
    R: ReminderStore,
{
    reminders: R,
}

impl<R> CompleteReminderUseCase<R>
where
    R: ReminderStore,
{
    pub fn new(reminders: R) -> Self {
        Self { reminders }
    }
}

#[async_trait]
impl<R> ICompleteReminderUseCase for CompleteReminderUseCase<R>
where
    R: ReminderStore,
{
    async fn execute(&self, reminder_id: &str) -> Result<Reminder, StoreError> {
        let updated = self
            .reminders
            .set_reminder_status(reminder_id, ReminderStatus::Completed)
            .await?;
        info!(reminder_id, "reminder completed");
        Ok(updated)
    }
}
