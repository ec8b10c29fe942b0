use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::domain::entities::TopicId;
use crate::topic::application::ports::incoming::use_cases::GetTopicError;
use crate::AppState;

#[get("/topicos/{id}")]
pub async fn get_topic_handler(
    _user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = TopicId::from(path.into_inner());

    match data.topic.get.execute(id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetTopicError::TopicNotFound) => ApiResponse::not_found(),
        Err(GetTopicError::RepositoryError(msg)) => {
            error!("Failed to load topic {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
