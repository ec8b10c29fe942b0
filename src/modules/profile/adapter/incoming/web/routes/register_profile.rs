use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::ports::incoming::use_cases::{
    ProfileCommandError, RegisterProfileCommand, RegisterProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct RegisterProfileRequest {
    pub name: String,
    pub email: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/usuario")]
pub async fn register_profile_handler(
    req: HttpRequest,
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<RegisterProfileRequest>,
) -> impl Responder {
    let RegisterProfileRequest { name, email } = payload.into_inner();

    let command = match RegisterProfileCommand::new(name, email) {
        Ok(cmd) => cmd,
        Err(err) => return map_profile_command_error(err),
    };

    match data.profile.register.execute(command).await {
        Ok(view) => {
            let location = format!("/usuario/{}", view.id);
            ApiResponse::created(&req, &location, view)
        }
        Err(err) => map_register_profile_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

pub(super) fn map_profile_command_error(err: ProfileCommandError) -> HttpResponse {
    match err {
        ProfileCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        ProfileCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 100 characters")
        }
        ProfileCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Email is not a valid address")
        }
        ProfileCommandError::EmailTooLong => {
            ApiResponse::bad_request("EMAIL_TOO_LONG", "Email must not exceed 255 characters")
        }
    }
}

fn map_register_profile_error(err: RegisterProfileError) -> HttpResponse {
    match err {
        RegisterProfileError::EmailAlreadyExists => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        RegisterProfileError::RepositoryError(msg) => {
            error!("Failed to register profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
