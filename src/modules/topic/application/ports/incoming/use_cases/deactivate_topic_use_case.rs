use async_trait::async_trait;

use crate::topic::application::domain::entities::TopicId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeactivateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeactivateTopicUseCase: Send + Sync {
    async fn execute(&self, id: TopicId) -> Result<(), DeactivateTopicError>;
}
