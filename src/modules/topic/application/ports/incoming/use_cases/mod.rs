pub mod create_topic_use_case;
pub mod deactivate_topic_use_case;
pub mod get_topic_use_case;
pub mod list_topics_use_case;
pub mod update_topic_use_case;

pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, TopicCommandError,
};
pub use deactivate_topic_use_case::{DeactivateTopicError, DeactivateTopicUseCase};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use list_topics_use_case::{ListTopicsError, ListTopicsUseCase};
pub use update_topic_use_case::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase};
