use async_trait::async_trait;

use crate::topic::application::domain::entities::TopicId;
use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicError, GetTopicUseCase},
    outgoing::TopicRepository,
};
use crate::topic::application::views::TopicView;

#[derive(Debug, Clone)]
pub struct GetTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetTopicUseCase for GetTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, id: TopicId) -> Result<TopicView, GetTopicError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| GetTopicError::RepositoryError(e.to_string()))?
            .map(TopicView::from)
            .ok_or(GetTopicError::TopicNotFound)
    }
}
