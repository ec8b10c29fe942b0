mod create_topic;
mod deactivate_topic;
mod get_topic;
mod list_topics;
mod update_topic;

pub use create_topic::create_topic_handler;
pub use deactivate_topic::deactivate_topic_handler;
pub use get_topic::get_topic_handler;
pub use list_topics::list_topics_handler;
pub use update_topic::update_topic_handler;
