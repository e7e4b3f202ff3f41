//! FaceRank API server entry point.
//!
//! Wires the infrastructure implementations into the domain services and
//! starts the HTTP server.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use fr_core::services::password::PasswordVerifier;
use fr_core::services::profile::ProfileService;
use fr_core::services::recognition::RecognitionService;
use fr_core::services::session::{SessionConfig, SessionService, SessionStore};
use fr_core::services::token::{TokenConfig, TokenService};
use fr_infra::cache::{RedisClient, RedisSessionStore};
use fr_infra::database::{DatabasePool, PgCredentialRepository, PgUserRepository};
use fr_infra::recognition::ClarifaiRecognitionService;
use fr_shared::config::AppConfig;

use fr_api::app::create_app;
use fr_api::middleware::rate_limit::RateLimiter;
use fr_api::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting FaceRank API Server");

    let config = AppConfig::from_env();
    if config.auth.is_using_default_secret() {
        log::warn!("TOKEN_SECRET is not set; using the development default");
    }

    // Infrastructure: database pool and Redis
    let db_pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let redis_client = RedisClient::new(&config.cache)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    // Repositories over the database pool
    let credential_repository = Arc::new(PgCredentialRepository::new(db_pool.get_pool().clone()));
    let user_repository = Arc::new(PgUserRepository::new(db_pool.get_pool().clone()));

    // Session store shared by the session service and the auth gate
    let session_store = Arc::new(RedisSessionStore::new(redis_client.clone()));
    let gate_store: Arc<dyn SessionStore> = session_store.clone();

    // Domain services
    let token_service = Arc::new(TokenService::new(TokenConfig::from_auth_config(&config.auth)));
    let session_service = Arc::new(SessionService::new(
        credential_repository,
        user_repository.clone(),
        session_store,
        token_service,
        PasswordVerifier::new(config.auth.bcrypt_cost),
        SessionConfig::default().with_ttl(config.auth.session_ttl_seconds),
    ));
    let profile_service = Arc::new(ProfileService::new(user_repository));
    let recognition_service: Arc<dyn RecognitionService> =
        Arc::new(ClarifaiRecognitionService::new(config.recognition.clone()));

    let app_state = web::Data::new(AppState {
        session_service,
        profile_service,
        recognition_service,
    });

    // Rate limiting counters share the Redis instance with the sessions
    let limiter_client = Arc::new(
        redis::Client::open(config.cache.url.as_str())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );
    let rate_limit_config = config.rate_limit.clone();

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        create_app(
            app_state.clone(),
            gate_store.clone(),
            RateLimiter::new(limiter_client.clone(), rate_limit_config.clone()),
        )
    })
    .bind(&bind_address)?
    .run()
    .await
}
