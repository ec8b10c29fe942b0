use async_trait::async_trait;

use crate::profile::application::ports::{
    incoming::use_cases::{RegisterProfileCommand, RegisterProfileError, RegisterProfileUseCase},
    outgoing::{NewProfileData, ProfileRepository, ProfileRepositoryError},
};
use crate::profile::application::views::ProfileView;

#[derive(Debug, Clone)]
pub struct RegisterProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> RegisterProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RegisterProfileUseCase for RegisterProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterProfileCommand,
    ) -> Result<ProfileView, RegisterProfileError> {
        let data = NewProfileData {
            name: command.name().to_string(),
            email: command.email().to_string(),
        };

        self.repository
            .save(data)
            .await
            .map(ProfileView::from)
            .map_err(|e| match e {
                ProfileRepositoryError::EmailAlreadyExists => {
                    RegisterProfileError::EmailAlreadyExists
                }
                other => RegisterProfileError::RepositoryError(other.to_string()),
            })
    }
}
