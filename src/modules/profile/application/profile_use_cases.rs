use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    DeactivateProfileUseCase, GetProfileUseCase, ListProfilesUseCase, RegisterProfileUseCase,
    UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub list: Arc<dyn ListProfilesUseCase + Send + Sync>,
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub register: Arc<dyn RegisterProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub deactivate: Arc<dyn DeactivateProfileUseCase + Send + Sync>,
}
