use async_trait::async_trait;

use crate::shared::pagination::{PageRequest, PageResult};
use crate::topic::application::ports::{
    incoming::use_cases::{ListTopicsError, ListTopicsUseCase},
    outgoing::TopicRepository,
};
use crate::topic::application::views::TopicView;

#[derive(Debug, Clone)]
pub struct ListTopicsService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListTopicsService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListTopicsUseCase for ListTopicsService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<TopicView>, ListTopicsError> {
        self.repository
            .list_active(page)
            .await
            .map(|result| result.map(TopicView::from))
            .map_err(|e| ListTopicsError::RepositoryError(e.to_string()))
    }
}
