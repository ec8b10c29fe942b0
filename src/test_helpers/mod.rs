use actix_web::{web, HttpResponse, Result};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::TokenProvider;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Serialize)]
pub struct ResetResponse {
    truncated: Vec<&'static str>,
}

fn current_env() -> String {
    std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = current_env();

    if env == "production" {
        tracing::error!("Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Issue an access token for any subject
/// GET /test/token/{subject}
pub async fn issue_test_token(
    subject: web::Path<String>,
    provider: web::Data<Arc<dyn TokenProvider + Send + Sync>>,
) -> Result<HttpResponse> {
    let subject = subject.into_inner();
    tracing::debug!("Issuing test token for {}", subject);

    let token = provider.issue_access_token(&subject).map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Wipe both tables and restart their id sequences
/// POST /test/reset
pub async fn reset_database(db: web::Data<Arc<DatabaseConnection>>) -> Result<HttpResponse> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "TRUNCATE topics, profiles RESTART IDENTITY",
    ))
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Reset failed: {}", e)))?;

    tracing::warn!("Test database reset");

    Ok(HttpResponse::Ok().json(ResetResponse {
        truncated: vec!["topics", "profiles"],
    }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/token/{subject}", web::get().to(issue_test_token))
            .route("/reset", web::post().to(reset_database)),
    );
}
