use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::domain::entities::TopicId;
use crate::topic::application::ports::incoming::use_cases::DeactivateTopicError;
use crate::AppState;

#[delete("/topicos/{id}")]
pub async fn deactivate_topic_handler(
    _user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = TopicId::from(path.into_inner());

    match data.topic.deactivate.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeactivateTopicError::TopicNotFound) => ApiResponse::not_found(),
        Err(DeactivateTopicError::RepositoryError(msg)) => {
            error!("Failed to deactivate topic {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
