use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::domain::entities::ProfileId;
use crate::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/usuario/{id}")]
pub async fn get_profile_handler(
    _user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ProfileId::from(path.into_inner());

    match data.profile.get.execute(id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetProfileError::ProfileNotFound) => ApiResponse::not_found(),
        Err(GetProfileError::RepositoryError(msg)) => {
            error!("Failed to load profile {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
