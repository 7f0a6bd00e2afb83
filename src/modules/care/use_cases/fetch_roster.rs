use async_trait::async_trait;

use crate::modules::store::ports::{PatientRoster, StoreError};
use crate::modules::store::records::PatientRecord;

#[async_trait]
pub trait IFetchRosterUseCase: Send + Sync {
    /// Patients linked to one provider.
    async fn execute(&self, provider_id: &str) -> Result<Vec<PatientRecord>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct FetchRosterUseCase<P>
where
    P: PatientRoster,
{
    roster: P,
}

impl<P> FetchRosterUseCase<P>
where
    P: PatientRoster,
{
    pub fn new(roster: P) -> Self {
        Self { roster }
    }
}

#[async_trait]
impl<P> IFetchRosterUseCase for FetchRosterUseCase<P>
where
    P: PatientRoster,
{
    async fn execute(&self, provider_id: &str) -> Result<Vec<PatientRecord>, StoreError> {
        self.roster.patients_of(provider_id).await
    }
}
