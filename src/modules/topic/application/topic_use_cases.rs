use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeactivateTopicUseCase, GetTopicUseCase, ListTopicsUseCase,
    UpdateTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub list: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub get: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub deactivate: Arc<dyn DeactivateTopicUseCase + Send + Sync>,
}
