use async_trait::async_trait;

use crate::profile::application::views::ProfileView;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListProfilesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListProfilesUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest)
        -> Result<PageResult<ProfileView>, ListProfilesError>;
}
