pub mod delete_goal;
pub mod edit_goal;
pub mod fetch_goals;
pub mod log_goal;

use crate::modules::store::ports::StoreError;
use crate::shared::validation::ValidationErrors;

/// Shared failure shape for the tracker flows: bad input stays local,
/// anything else is the store not answering.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GoalTrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}
