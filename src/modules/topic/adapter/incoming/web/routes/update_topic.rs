use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::domain::entities::{TopicId, TopicStatus};
use crate::topic::application::ports::incoming::use_cases::{UpdateTopicCommand, UpdateTopicError};
use crate::AppState;

use super::create_topic::map_topic_command_error;

#[derive(Debug, Deserialize)]
pub struct UpdateTopicRequest {
    pub id: i64,
    pub title: Option<String>,
    pub message: Option<String>,
    pub course: Option<String>,
    pub status: Option<TopicStatus>,
}

#[put("/topicos")]
pub async fn update_topic_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateTopicRequest>,
) -> impl Responder {
    let UpdateTopicRequest {
        id,
        title,
        message,
        course,
        status,
    } = payload.into_inner();

    let command = match UpdateTopicCommand::new(TopicId::from(id), title, message, course, status)
    {
        Ok(cmd) => cmd,
        Err(err) => return map_topic_command_error(err),
    };

    match data.topic.update.execute(command).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_update_topic_error(id, err),
    }
}

fn map_update_topic_error(id: i64, err: UpdateTopicError) -> HttpResponse {
    match err {
        UpdateTopicError::TopicNotFound => ApiResponse::not_found(),
        UpdateTopicError::TopicAlreadyExists => {
            ApiResponse::conflict("TOPIC_ALREADY_EXISTS", "Topic already exists")
        }
        UpdateTopicError::RepositoryError(msg) => {
            error!("Failed to update topic {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
