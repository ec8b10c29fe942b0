use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::topic::application::domain::entities::{Topic, TopicId, TopicStatus};

/// Transport projection of a topic. `author` carries the author's name only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicView {
    pub id: TopicId,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: TopicStatus,
    pub author: String,
    pub course: String,
}

impl From<&Topic> for TopicView {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title.clone(),
            message: topic.message.clone(),
            created_at: topic.created_at,
            status: topic.status,
            author: topic.author.name.clone(),
            course: topic.course.clone(),
        }
    }
}

impl From<Topic> for TopicView {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            message: topic.message,
            created_at: topic.created_at,
            status: topic.status,
            author: topic.author.name,
            course: topic.course,
        }
    }
}
