use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileId;
use crate::topic::application::views::TopicView;

const MAX_TITLE_CHARS: usize = 100;
const MAX_COURSE_CHARS: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Field validation shared by create and update commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Course cannot be empty")]
    EmptyCourse,

    #[error("Course too long")]
    CourseTooLong,
}

pub(crate) fn normalize_title(title: &str) -> Result<String, TopicCommandError> {
    let title = title.trim();

    if title.is_empty() {
        return Err(TopicCommandError::EmptyTitle);
    }

    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(TopicCommandError::TitleTooLong);
    }

    Ok(title.to_string())
}

pub(crate) fn normalize_message(message: &str) -> Result<String, TopicCommandError> {
    let message = message.trim();

    if message.is_empty() {
        return Err(TopicCommandError::EmptyMessage);
    }

    Ok(message.to_string())
}

pub(crate) fn normalize_course(course: &str) -> Result<String, TopicCommandError> {
    let course = course.trim();

    if course.is_empty() {
        return Err(TopicCommandError::EmptyCourse);
    }

    if course.chars().count() > MAX_COURSE_CHARS {
        return Err(TopicCommandError::CourseTooLong);
    }

    Ok(course.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    title: String,
    message: String,
    course: String,
    author_id: ProfileId,
}

impl CreateTopicCommand {
    pub fn new(
        title: String,
        message: String,
        course: String,
        author_id: ProfileId,
    ) -> Result<Self, TopicCommandError> {
        Ok(Self {
            title: normalize_title(&title)?,
            message: normalize_message(&message)?,
            course: normalize_course(&course)?,
            author_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn author_id(&self) -> ProfileId {
        self.author_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Author not found")]
    AuthorNotFound,

    #[error("Author is inactive")]
    AuthorInactive,

    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicView, CreateTopicError>;
}
