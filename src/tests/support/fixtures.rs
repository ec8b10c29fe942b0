use chrono::Utc;

use crate::profile::application::domain::entities::{Profile, ProfileId};
use crate::topic::application::domain::entities::{Topic, TopicAuthor, TopicId, TopicStatus};

/// Active profile without topics
pub fn profile(id: i64, name: &str, email: &str) -> Profile {
    Profile {
        id: ProfileId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        active: true,
        topic_titles: vec![],
    }
}

/// Active, open topic created now
pub fn topic(id: i64, author_id: i64, author_name: &str, title: &str) -> Topic {
    Topic {
        id: TopicId::from(id),
        title: title.to_string(),
        message: format!("Message for {title}"),
        course: "Rust".to_string(),
        created_at: Utc::now(),
        status: TopicStatus::Open,
        author: TopicAuthor {
            id: ProfileId::from(author_id),
            name: author_name.to_string(),
        },
        active: true,
    }
}
