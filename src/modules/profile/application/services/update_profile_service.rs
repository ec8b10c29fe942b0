use async_trait::async_trait;

use crate::profile::application::ports::{
    incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
    outgoing::{ProfileChanges, ProfileRepository, ProfileRepositoryError},
};
use crate::profile::application::views::ProfileView;

#[derive(Debug, Clone)]
pub struct UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<ProfileView, UpdateProfileError> {
        let changes = ProfileChanges {
            name: command.name().map(str::to_string),
            email: command.email().map(str::to_string),
        };

        self.repository
            .update(command.id(), changes)
            .await
            .map(ProfileView::from)
            .map_err(|e| match e {
                ProfileRepositoryError::ProfileNotFound => UpdateProfileError::ProfileNotFound,
                ProfileRepositoryError::EmailAlreadyExists => {
                    UpdateProfileError::EmailAlreadyExists
                }
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
