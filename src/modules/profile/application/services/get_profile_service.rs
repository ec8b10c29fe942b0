use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileId;
use crate::profile::application::ports::{
    incoming::use_cases::{GetProfileError, GetProfileUseCase},
    outgoing::ProfileRepository,
};
use crate::profile::application::views::ProfileView;

#[derive(Debug, Clone)]
pub struct GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, id: ProfileId) -> Result<ProfileView, GetProfileError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))?
            .map(ProfileView::from)
            .ok_or(GetProfileError::ProfileNotFound)
    }
}
