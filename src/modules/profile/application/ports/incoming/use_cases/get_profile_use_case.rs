use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileId;
use crate::profile::application::views::ProfileView;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, id: ProfileId) -> Result<ProfileView, GetProfileError>;
}
