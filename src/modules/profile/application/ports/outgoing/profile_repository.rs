use async_trait::async_trait;

use crate::profile::application::domain::entities::{Profile, ProfileId};
use crate::shared::pagination::{PageRequest, PageResult};

// Input DTO for registering a profile
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfileData {
    pub name: String,
    pub email: String,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Email already registered")]
    EmailAlreadyExists,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Active profiles only, ascending by id.
    async fn list_active(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<Profile>, ProfileRepositoryError>;

    /// Returns the profile regardless of its active flag.
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn save(&self, data: NewProfileData) -> Result<Profile, ProfileRepositoryError>;

    async fn update(
        &self,
        id: ProfileId,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Idempotent; deactivating an inactive profile is a success.
    async fn deactivate(&self, id: ProfileId) -> Result<(), ProfileRepositoryError>;
}
