use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileId;
use crate::profile::application::ports::{
    incoming::use_cases::{DeactivateProfileError, DeactivateProfileUseCase},
    outgoing::{ProfileRepository, ProfileRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeactivateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeactivateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeactivateProfileUseCase for DeactivateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, id: ProfileId) -> Result<(), DeactivateProfileError> {
        self.repository.deactivate(id).await.map_err(|e| match e {
            ProfileRepositoryError::ProfileNotFound => DeactivateProfileError::ProfileNotFound,
            other => DeactivateProfileError::RepositoryError(other.to_string()),
        })
    }
}
