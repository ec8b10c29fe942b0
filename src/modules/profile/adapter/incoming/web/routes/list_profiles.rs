use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::ports::incoming::use_cases::ListProfilesError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageQuery;
use crate::AppState;

#[get("/usuario")]
pub async fn list_profiles_handler(
    _user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.list.execute(query.into_inner().into()).await {
        Ok(page) => ApiResponse::success(page),

        Err(ListProfilesError::RepositoryError(msg)) => {
            error!("Failed to list profiles: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
