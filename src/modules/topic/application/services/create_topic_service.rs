use async_trait::async_trait;
use chrono::Utc;

use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::topic::application::domain::entities::{TopicAuthor, TopicStatus};
use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{NewTopicData, TopicRepository, TopicRepositoryError},
};
use crate::topic::application::views::TopicView;

/// Resolves the author through the profile port before persisting.
#[derive(Debug, Clone)]
pub struct CreateTopicService<R, P>
where
    R: TopicRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    topics: R,
    profiles: P,
}

impl<R, P> CreateTopicService<R, P>
where
    R: TopicRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    pub fn new(topics: R, profiles: P) -> Self {
        Self { topics, profiles }
    }
}

#[async_trait]
impl<R, P> CreateTopicUseCase for CreateTopicService<R, P>
where
    R: TopicRepository + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicView, CreateTopicError> {
        // 1. author must exist
        let author = self
            .profiles
            .find_by_id(command.author_id())
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?
            .ok_or(CreateTopicError::AuthorNotFound)?;

        // 2. and be active
        if !author.active {
            return Err(CreateTopicError::AuthorInactive);
        }

        // 3. no active topic with the same title and message
        let duplicate = self
            .topics
            .duplicate_exists(command.title(), command.message())
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?;

        if duplicate {
            return Err(CreateTopicError::TopicAlreadyExists);
        }

        let data = NewTopicData {
            title: command.title().to_string(),
            message: command.message().to_string(),
            course: command.course().to_string(),
            author: TopicAuthor {
                id: author.id,
                name: author.name,
            },
            status: TopicStatus::Open,
            created_at: Utc::now(),
        };

        // A concurrent insert can still win; storage rejects the second one
        self.topics
            .create_topic(data)
            .await
            .map(TopicView::from)
            .map_err(|e| match e {
                TopicRepositoryError::TopicAlreadyExists => CreateTopicError::TopicAlreadyExists,
                other => CreateTopicError::RepositoryError(other.to_string()),
            })
    }
}
