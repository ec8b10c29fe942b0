use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned profile identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(i64);

impl ProfileId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProfileId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProfileId> for i64 {
    fn from(id: ProfileId) -> Self {
        id.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A forum user. Deactivated profiles stay readable by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    pub active: bool,
    /// Titles of the topics this profile authored, oldest first
    pub topic_titles: Vec<String>,
}
