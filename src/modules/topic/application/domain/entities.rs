use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::profile::application::domain::entities::ProfileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(i64);

impl TopicId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TopicId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Status
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicStatus {
    #[default]
    Open,
    Closed,
    Solved,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown topic status: {0}")]
pub struct UnknownTopicStatus(pub String);

impl TopicStatus {
    /// Stored and serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Open => "OPEN",
            TopicStatus::Closed => "CLOSED",
            TopicStatus::Solved => "SOLVED",
        }
    }
}

impl FromStr for TopicStatus {
    type Err = UnknownTopicStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(TopicStatus::Open),
            "CLOSED" => Ok(TopicStatus::Closed),
            "SOLVED" => Ok(TopicStatus::Solved),
            other => Err(UnknownTopicStatus(other.to_string())),
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Topic
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicAuthor {
    pub id: ProfileId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub message: String,
    pub course: String,
    pub created_at: DateTime<Utc>,
    pub status: TopicStatus,
    pub author: TopicAuthor,
    pub active: bool,
}
