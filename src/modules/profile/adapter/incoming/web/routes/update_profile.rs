use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::domain::entities::ProfileId;
use crate::profile::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::register_profile::map_profile_command_error;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[put("/usuario")]
pub async fn update_profile_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let UpdateProfileRequest { id, name, email } = payload.into_inner();

    let command = match UpdateProfileCommand::new(ProfileId::from(id), name, email) {
        Ok(cmd) => cmd,
        Err(err) => return map_profile_command_error(err),
    };

    match data.profile.update.execute(command).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_update_profile_error(id, err),
    }
}

fn map_update_profile_error(id: i64, err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::ProfileNotFound => ApiResponse::not_found(),
        UpdateProfileError::EmailAlreadyExists => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        UpdateProfileError::RepositoryError(msg) => {
            error!("Failed to update profile {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
