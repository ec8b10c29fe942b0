use async_trait::async_trait;

use crate::topic::application::domain::entities::TopicId;
use crate::topic::application::ports::{
    incoming::use_cases::{DeactivateTopicError, DeactivateTopicUseCase},
    outgoing::{TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeactivateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeactivateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeactivateTopicUseCase for DeactivateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, id: TopicId) -> Result<(), DeactivateTopicError> {
        self.repository
            .deactivate_topic(id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeactivateTopicError::TopicNotFound,
                other => DeactivateTopicError::RepositoryError(other.to_string()),
            })
    }
}
