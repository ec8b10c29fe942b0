pub mod create_topic_service;
pub mod deactivate_topic_service;
pub mod get_topic_service;
pub mod list_topics_service;
pub mod update_topic_service;

pub use create_topic_service::CreateTopicService;
pub use deactivate_topic_service::DeactivateTopicService;
pub use get_topic_service::GetTopicService;
pub use list_topics_service::ListTopicsService;
pub use update_topic_service::UpdateTopicService;
