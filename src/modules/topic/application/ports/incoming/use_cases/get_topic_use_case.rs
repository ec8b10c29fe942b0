use async_trait::async_trait;

use crate::topic::application::domain::entities::TopicId;
use crate::topic::application::views::TopicView;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, id: TopicId) -> Result<TopicView, GetTopicError>;
}
