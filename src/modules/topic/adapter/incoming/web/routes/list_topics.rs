use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageQuery;
use crate::topic::application::ports::incoming::use_cases::ListTopicsError;
use crate::AppState;

#[get("/topicos")]
pub async fn list_topics_handler(
    _user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.list.execute(query.into_inner().into()).await {
        Ok(page) => ApiResponse::success(page),

        Err(ListTopicsError::RepositoryError(msg)) => {
            error!("Failed to list topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
