use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicChanges, TopicRepository, TopicRepositoryError},
};
use crate::topic::application::views::TopicView;

#[derive(Debug, Clone)]
pub struct UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicView, UpdateTopicError> {
        let changes = TopicChanges {
            title: command.title().map(str::to_string),
            message: command.message().map(str::to_string),
            course: command.course().map(str::to_string),
            status: command.status(),
        };

        self.repository
            .update_topic(command.id(), changes)
            .await
            .map(TopicView::from)
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                TopicRepositoryError::TopicAlreadyExists => UpdateTopicError::TopicAlreadyExists,
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })
    }
}
