use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::pagination::{PageRequest, PageResult};
use crate::topic::application::domain::entities::{Topic, TopicAuthor, TopicId, TopicStatus};

// Input DTO for creating a topic; the author was already resolved by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct NewTopicData {
    pub title: String,
    pub message: String,
    pub course: String,
    pub author: TopicAuthor,
    pub status: TopicStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicChanges {
    pub title: Option<String>,
    pub message: Option<String>,
    pub course: Option<String>,
    pub status: Option<TopicStatus>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("An active topic with this title and message already exists")]
    TopicAlreadyExists,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Active topics only, ascending by id.
    async fn list_active(&self, page: PageRequest)
        -> Result<PageResult<Topic>, TopicRepositoryError>;

    /// Returns the topic regardless of its active flag.
    async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicRepositoryError>;

    /// True when an active topic already has this exact title and message.
    async fn duplicate_exists(
        &self,
        title: &str,
        message: &str,
    ) -> Result<bool, TopicRepositoryError>;

    async fn create_topic(&self, data: NewTopicData) -> Result<Topic, TopicRepositoryError>;

    async fn update_topic(
        &self,
        id: TopicId,
        changes: TopicChanges,
    ) -> Result<Topic, TopicRepositoryError>;

    async fn deactivate_topic(&self, id: TopicId) -> Result<(), TopicRepositoryError>;
}
