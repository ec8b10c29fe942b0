use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    profile::application::domain::entities::ProfileId,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        CreateTopicCommand, CreateTopicError, TopicCommandError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct CreateTopicRequest {
    pub title: String,
    pub message: String,
    pub course: String,
    pub author_id: i64,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/topicos")]
pub async fn create_topic_handler(
    req: HttpRequest,
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let CreateTopicRequest {
        title,
        message,
        course,
        author_id,
    } = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command =
        match CreateTopicCommand::new(title, message, course, ProfileId::from(author_id)) {
            Ok(cmd) => cmd,
            Err(err) => return map_topic_command_error(err),
        };

    // 2️⃣ Execute use case
    match data.topic.create.execute(command).await {
        Ok(topic) => {
            let location = format!("/topicos/{}", topic.id);
            ApiResponse::created(&req, &location, topic)
        }
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

pub(super) fn map_topic_command_error(err: TopicCommandError) -> HttpResponse {
    match err {
        TopicCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        TopicCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 100 characters")
        }
        TopicCommandError::EmptyMessage => {
            ApiResponse::bad_request("EMPTY_MESSAGE", "Message cannot be empty")
        }
        TopicCommandError::EmptyCourse => {
            ApiResponse::bad_request("EMPTY_COURSE", "Course cannot be empty")
        }
        TopicCommandError::CourseTooLong => {
            ApiResponse::bad_request("COURSE_TOO_LONG", "Course must not exceed 100 characters")
        }
    }
}

fn map_create_topic_error(err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::AuthorNotFound => {
            ApiResponse::bad_request("AUTHOR_NOT_FOUND", "Author profile does not exist")
        }
        CreateTopicError::AuthorInactive => {
            ApiResponse::bad_request("AUTHOR_INACTIVE", "Author profile is inactive")
        }
        CreateTopicError::TopicAlreadyExists => {
            ApiResponse::conflict("TOPIC_ALREADY_EXISTS", "Topic already exists")
        }
        CreateTopicError::RepositoryError(msg) => {
            error!("Failed to create topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
