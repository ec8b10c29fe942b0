use std::sync::Arc;

use actix_web::web;

use crate::profile::application::ports::incoming::use_cases::{
    DeactivateProfileUseCase, GetProfileUseCase, ListProfilesUseCase, RegisterProfileUseCase,
    UpdateProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeactivateTopicUseCase, GetTopicUseCase, ListTopicsUseCase,
    UpdateTopicUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;

/// Every use case starts as a stub that panics when called; tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
    topic: TopicUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: ProfileUseCases {
                list: Arc::new(StubListProfilesUseCase),
                get: Arc::new(StubGetProfileUseCase),
                register: Arc::new(StubRegisterProfileUseCase),
                update: Arc::new(StubUpdateProfileUseCase),
                deactivate: Arc::new(StubDeactivateProfileUseCase),
            },
            topic: TopicUseCases {
                list: Arc::new(StubListTopicsUseCase),
                get: Arc::new(StubGetTopicUseCase),
                create: Arc::new(StubCreateTopicUseCase),
                update: Arc::new(StubUpdateTopicUseCase),
                deactivate: Arc::new(StubDeactivateTopicUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ── profile ──

    pub fn with_list_profiles(mut self, uc: impl ListProfilesUseCase + 'static) -> Self {
        self.profile.list = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_register_profile(mut self, uc: impl RegisterProfileUseCase + 'static) -> Self {
        self.profile.register = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    pub fn with_deactivate_profile(
        mut self,
        uc: impl DeactivateProfileUseCase + 'static,
    ) -> Self {
        self.profile.deactivate = Arc::new(uc);
        self
    }

    // ── topic ──

    pub fn with_list_topics(mut self, uc: impl ListTopicsUseCase + 'static) -> Self {
        self.topic.list = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + 'static) -> Self {
        self.topic.get = Arc::new(uc);
        self
    }

    pub fn with_create_topic(mut self, uc: impl CreateTopicUseCase + 'static) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_update_topic(mut self, uc: impl UpdateTopicUseCase + 'static) -> Self {
        self.topic.update = Arc::new(uc);
        self
    }

    pub fn with_deactivate_topic(mut self, uc: impl DeactivateTopicUseCase + 'static) -> Self {
        self.topic.deactivate = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
            topic: self.topic,
        })
    }
}
