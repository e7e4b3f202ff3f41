//! Handler for GET /profile/{id}
//!
//! The gate has already resolved the session; this handler additionally
//! requires that the session's user is the profile's owner. A mismatched
//! but otherwise valid session gets 403, not 404, so ownership failures
//! are distinguishable from missing users in the logs.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use fr_core::errors::DomainError;
use fr_core::repositories::{CredentialRepository, UserRepository};
use fr_core::services::session::SessionStore;

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

pub async fn profile_get<C, U, S>(
    ctx: AuthContext,
    state: web::Data<AppState<C, U, S>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    let id = path.into_inner();

    if ctx.user_id != id {
        return HttpResponse::Forbidden().json("Forbidden");
    }

    match state.profile_service.get(id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(DomainError::NotFound { .. }) => HttpResponse::NotFound().json("User not found"),
        Err(error) => handle_domain_error(error),
    }
}
