use async_trait::async_trait;

use crate::profile::application::domain::entities::ProfileId;
use crate::profile::application::ports::incoming::use_cases::{
    DeactivateProfileError, DeactivateProfileUseCase, GetProfileError, GetProfileUseCase,
    ListProfilesError, ListProfilesUseCase, RegisterProfileCommand, RegisterProfileError,
    RegisterProfileUseCase, UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::profile::application::views::ProfileView;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::topic::application::domain::entities::TopicId;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeactivateTopicError,
    DeactivateTopicUseCase, GetTopicError, GetTopicUseCase, ListTopicsError, ListTopicsUseCase,
    UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::views::TopicView;

// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubListProfilesUseCase;

#[async_trait]
impl ListProfilesUseCase for StubListProfilesUseCase {
    async fn execute(
        &self,
        _page: PageRequest,
    ) -> Result<PageResult<ProfileView>, ListProfilesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _id: ProfileId) -> Result<ProfileView, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRegisterProfileUseCase;

#[async_trait]
impl RegisterProfileUseCase for StubRegisterProfileUseCase {
    async fn execute(
        &self,
        _command: RegisterProfileCommand,
    ) -> Result<ProfileView, RegisterProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<ProfileView, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeactivateProfileUseCase;

#[async_trait]
impl DeactivateProfileUseCase for StubDeactivateProfileUseCase {
    async fn execute(&self, _id: ProfileId) -> Result<(), DeactivateProfileError> {
        unimplemented!("Not used in this test")
    }
}

// ──────────────────────────────────────────────────────────
// Topic
// ──────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubListTopicsUseCase;

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(&self, _page: PageRequest) -> Result<PageResult<TopicView>, ListTopicsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetTopicUseCase;

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _id: TopicId) -> Result<TopicView, GetTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<TopicView, CreateTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateTopicUseCase;

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, _command: UpdateTopicCommand) -> Result<TopicView, UpdateTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeactivateTopicUseCase;

#[async_trait]
impl DeactivateTopicUseCase for StubDeactivateTopicUseCase {
    async fn execute(&self, _id: TopicId) -> Result<(), DeactivateTopicError> {
        unimplemented!("Not used in this test")
    }
}
