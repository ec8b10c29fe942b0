use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileId;
use crate::profile::application::views::ProfileView;

use super::register_profile_use_case::{normalize_email, normalize_name, ProfileCommandError};

//
// ──────────────────────────────────────────────────────────
// Update Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    id: ProfileId,
    name: Option<String>,
    email: Option<String>,
}

impl UpdateProfileCommand {
    /// Fields left as `None` keep their stored value.
    pub fn new(
        id: ProfileId,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, ProfileCommandError> {
        let name = name.as_deref().map(normalize_name).transpose()?;
        let email = email.as_deref().map(normalize_email).transpose()?;

        Ok(Self { id, name, email })
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand)
        -> Result<ProfileView, UpdateProfileError>;
}
