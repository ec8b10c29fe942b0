use async_trait::async_trait;
use email_address::EmailAddress;

use crate::profile::application::views::ProfileView;

const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 255;

//
// ──────────────────────────────────────────────────────────
// Field validation shared by register and update commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must be at most 100 characters")]
    NameTooLong,

    #[error("Email is not a valid address")]
    InvalidEmail,

    #[error("Email must be at most 255 characters")]
    EmailTooLong,
}

pub(crate) fn normalize_name(name: &str) -> Result<String, ProfileCommandError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ProfileCommandError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ProfileCommandError::NameTooLong);
    }

    Ok(name.to_string())
}

/// Trimmed and lowercased so uniqueness is case-insensitive.
pub(crate) fn normalize_email(email: &str) -> Result<String, ProfileCommandError> {
    let email = email.trim().to_lowercase();

    if email.chars().count() > MAX_EMAIL_CHARS {
        return Err(ProfileCommandError::EmailTooLong);
    }

    if !EmailAddress::is_valid(&email) {
        return Err(ProfileCommandError::InvalidEmail);
    }

    Ok(email)
}

//
// ──────────────────────────────────────────────────────────
// Register Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterProfileCommand {
    name: String,
    email: String,
}

impl RegisterProfileCommand {
    pub fn new(name: String, email: String) -> Result<Self, ProfileCommandError> {
        Ok(Self {
            name: normalize_name(&name)?,
            email: normalize_email(&email)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterProfileError {
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
pub trait RegisterProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RegisterProfileCommand,
    ) -> Result<ProfileView, RegisterProfileError>;
}
