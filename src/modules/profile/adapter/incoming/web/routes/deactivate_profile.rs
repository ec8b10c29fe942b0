use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::domain::entities::ProfileId;
use crate::profile::application::ports::incoming::use_cases::DeactivateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft delete: the row stays and can still be fetched by id.
#[delete("/usuario/{id}")]
pub async fn deactivate_profile_handler(
    _user: AuthenticatedUser,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ProfileId::from(path.into_inner());

    match data.profile.deactivate.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeactivateProfileError::ProfileNotFound) => ApiResponse::not_found(),
        Err(DeactivateProfileError::RepositoryError(msg)) => {
            error!("Failed to deactivate profile {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
