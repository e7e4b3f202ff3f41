//! Application factory
//!
//! Builds the Actix-web application with its middleware pipeline and
//! routes. The pipeline runs in a fixed order: rate limiting first, then
//! CORS and logging; input validation happens in the handlers' extractors;
//! protected routes pass the session auth gate last, just before the
//! handler.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error, HttpResponse};

use fr_core::repositories::{CredentialRepository, UserRepository};
use fr_core::services::session::SessionStore;

use crate::middleware::{auth::SessionAuth, cors::create_cors, rate_limit::RateLimiter};
use crate::routes::auth::{register, signin};
use crate::routes::image::{image_detect, image_entries};
use crate::routes::profile::{profile_get, profile_update};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<C, U, S>(
    app_state: web::Data<AppState<C, U, S>>,
    session_store: Arc<dyn SessionStore>,
    rate_limiter: RateLimiter,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    C: CredentialRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    let cors = create_cors();

    App::new()
        // Shared services and the gate's session store handle
        .app_data(app_state)
        .app_data(web::Data::new(session_store))
        // Middleware (the outermost wrap runs first: rate limit, CORS, log)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(rate_limiter)
        // Public routes
        .route("/", web::get().to(root_status))
        .route("/health", web::get().to(health_check))
        .route("/signin", web::post().to(signin::<C, U, S>))
        .route("/register", web::post().to(register::<C, U, S>))
        // Protected routes behind the session auth gate
        .route(
            "/profile/{id}",
            web::get().to(profile_get::<C, U, S>).wrap(SessionAuth),
        )
        .route(
            "/profile/{id}",
            web::post().to(profile_update::<C, U, S>).wrap(SessionAuth),
        )
        .route(
            "/image",
            web::put().to(image_entries::<C, U, S>).wrap(SessionAuth),
        )
        .route(
            "/imageurl",
            web::post().to(image_detect::<C, U, S>).wrap(SessionAuth),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Root endpoint kept for the original client's reachability probe
async fn root_status() -> HttpResponse {
    HttpResponse::Ok().json("success")
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "facerank-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
