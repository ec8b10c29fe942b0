pub mod modules;
pub use modules::auth;
pub use modules::profile;
pub use modules::topic;
pub mod config;
pub mod health;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::config::AppConfig;
use crate::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::services::{
    DeactivateProfileService, GetProfileService, ListProfilesService, RegisterProfileService,
    UpdateProfileService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::topic::adapter::outgoing::TopicRepositoryPostgres;
use crate::topic::application::services::{
    CreateTopicService, DeactivateTopicService, GetTopicService, ListTopicsService,
    UpdateTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
    pub topic: TopicUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // SAFETY GUARD: test routes never run in production
    #[cfg(feature = "test-helpers")]
    {
        if config.is_production() {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!(
            "Test helper routes are ENABLED for environment: {}",
            config.environment
        );
    }

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);

    // Repositories
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        profile: ProfileUseCases {
            list: Arc::new(ListProfilesService::new(profile_repo.clone())),
            get: Arc::new(GetProfileService::new(profile_repo.clone())),
            register: Arc::new(RegisterProfileService::new(profile_repo.clone())),
            update: Arc::new(UpdateProfileService::new(profile_repo.clone())),
            deactivate: Arc::new(DeactivateProfileService::new(profile_repo.clone())),
        },
        topic: TopicUseCases {
            list: Arc::new(ListTopicsService::new(topic_repo.clone())),
            get: Arc::new(GetTopicService::new(topic_repo.clone())),
            create: Arc::new(CreateTopicService::new(topic_repo.clone(), profile_repo)),
            update: Arc::new(UpdateTopicService::new(topic_repo.clone())),
            deactivate: Arc::new(DeactivateTopicService::new(topic_repo)),
        },
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let db_for_server = Arc::clone(&db_arc);

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profiles
    cfg.service(crate::profile::adapter::incoming::web::routes::list_profiles_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::register_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::deactivate_profile_handler);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::list_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::deactivate_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
