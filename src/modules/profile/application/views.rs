use serde::{Deserialize, Serialize};

use crate::profile::application::domain::entities::{Profile, ProfileId};

/// Transport projection of a profile.
///
/// `topics` is omitted entirely when the profile authored nothing; an empty
/// array is never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

impl From<&Profile> for ProfileView {
    fn from(profile: &Profile) -> Self {
        let topics = if profile.topic_titles.is_empty() {
            None
        } else {
            Some(profile.topic_titles.clone())
        };

        Self {
            id: profile.id,
            name: profile.name.clone(),
            email: profile.email.clone(),
            topics,
        }
    }
}

impl From<Profile> for ProfileView {
    fn from(profile: Profile) -> Self {
        let topics = (!profile.topic_titles.is_empty()).then_some(profile.topic_titles);

        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            topics,
        }
    }
}
