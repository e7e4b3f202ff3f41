//! Translation of domain errors into HTTP responses.
//!
//! The response bodies are the plain JSON strings the original web client
//! expects. Store outages map to 500-class responses and are never
//! conflated with credential or session failures, so an infrastructure
//! problem cannot masquerade as "not logged in" or vice versa. Full error
//! detail stays in the server log.

use actix_web::HttpResponse;

use fr_core::errors::{AuthError, DomainError};

/// Map a domain error onto the default HTTP response for this API
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("domain error: {:?}", error);

    match &error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::BadRequest().json("Wrong credentials")
        }
        DomainError::Auth(AuthError::Unauthorized) => HttpResponse::BadRequest().json("Unauthorized"),
        DomainError::Auth(AuthError::EmailTaken) => {
            HttpResponse::BadRequest().json("Unable to register user.")
        }
        DomainError::Validation(_) => HttpResponse::BadRequest().json("Invalid request"),
        DomainError::Token(_) => HttpResponse::BadRequest().json("Unauthorized"),
        DomainError::NotFound { .. } => HttpResponse::NotFound().json("User not found"),
        DomainError::Store(_) | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json("Internal server error")
        }
    }
}
