use async_trait::async_trait;

use crate::shared::pagination::{PageRequest, PageResult};
use crate::topic::application::views::TopicView;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<TopicView>, ListTopicsError>;
}
