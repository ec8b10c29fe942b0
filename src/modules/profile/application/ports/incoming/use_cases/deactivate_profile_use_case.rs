use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeactivateProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeactivateProfileUseCase: Send + Sync {
    async fn execute(&self, id: ProfileId) -> Result<(), DeactivateProfileError>;
}
