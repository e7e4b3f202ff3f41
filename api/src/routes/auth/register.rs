//! Handler for POST /register
//!
//! Creates the credential and the user record in one transaction and
//! returns the new user. Registration does not sign the user in; the
//! client follows up with /signin.

use actix_web::{web, HttpResponse};
use validator::Validate;

use fr_core::errors::DomainError;
use fr_core::repositories::{CredentialRepository, UserRepository};
use fr_core::services::session::SessionStore;

use crate::dto::auth_dto::RegisterRequest;
use crate::routes::AppState;

pub async fn register<C, U, S>(
    state: web::Data<AppState<C, U, S>>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    if body.validate().is_err() {
        return HttpResponse::BadRequest().json("Unable to register user.");
    }

    match state
        .session_service
        .register(&body.email, &body.name, &body.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(error) => {
            log::error!("registration failed: {:?}", error);
            match &error {
                // Store outages are server faults, not client mistakes
                DomainError::Store(_) => {
                    HttpResponse::InternalServerError().json("Internal server error")
                }
                _ => HttpResponse::BadRequest().json("Unable to register user."),
            }
        }
    }
}
