pub mod topic_repository;

pub use topic_repository::{NewTopicData, TopicChanges, TopicRepository, TopicRepositoryError};
