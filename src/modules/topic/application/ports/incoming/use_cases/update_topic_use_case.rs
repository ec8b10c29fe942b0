use async_trait::async_trait;

use crate::topic::application::domain::entities::{TopicId, TopicStatus};
use crate::topic::application::views::TopicView;

use super::create_topic_use_case::{
    normalize_course, normalize_message, normalize_title, TopicCommandError,
};

#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    id: TopicId,
    title: Option<String>,
    message: Option<String>,
    course: Option<String>,
    status: Option<TopicStatus>,
}

impl UpdateTopicCommand {
    pub fn new(
        id: TopicId,
        title: Option<String>,
        message: Option<String>,
        course: Option<String>,
        status: Option<TopicStatus>,
    ) -> Result<Self, TopicCommandError> {
        Ok(Self {
            id,
            title: title.as_deref().map(normalize_title).transpose()?,
            message: message.as_deref().map(normalize_message).transpose()?,
            course: course.as_deref().map(normalize_course).transpose()?,
            status,
        })
    }

    pub fn id(&self) -> TopicId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    pub fn status(&self) -> Option<TopicStatus> {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicView, UpdateTopicError>;
}
