use async_trait::async_trait;

use crate::profile::application::ports::{
    incoming::use_cases::{ListProfilesError, ListProfilesUseCase},
    outgoing::ProfileRepository,
};
use crate::profile::application::views::ProfileView;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct ListProfilesService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListProfilesService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListProfilesUseCase for ListProfilesService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<ProfileView>, ListProfilesError> {
        self.repository
            .list_active(page)
            .await
            .map(|result| result.map(ProfileView::from))
            .map_err(|e| ListProfilesError::RepositoryError(e.to_string()))
    }
}
