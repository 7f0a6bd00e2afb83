use async_trait::async_trait;

use crate::modules::store::ports::{StoreError, UserDirectory, UserFilter};
use crate::modules::store::records::{Role, User};

/// Provider accounts offered in the registration form's provider picker.
#[async_trait]
pub trait IListProvidersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct ListProvidersUseCase<D>
where
    D: UserDirectory,
{
    directory: D,
}

impl<D> ListProvidersUseCase<D>
where
    D: UserDirectory,
{
    pub fn new(directory: D) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D> IListProvidersUseCase for ListProvidersUseCase<D>
where
    D: UserDirectory,
{
    async fn execute(&self) -> Result<Vec<User>, StoreError> {
        self.directory.find_users(UserFilter::role(Role::Provider)).await
    }
}
