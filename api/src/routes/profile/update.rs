//! Handler for POST /profile/{id}
//!
//! Applies a partial profile update for the session's own user.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use fr_core::errors::DomainError;
use fr_core::repositories::{CredentialRepository, UserRepository};
use fr_core::services::session::SessionStore;

use crate::dto::profile_dto::ProfileUpdateRequest;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

pub async fn profile_update<C, U, S>(
    ctx: AuthContext,
    state: web::Data<AppState<C, U, S>>,
    path: web::Path<Uuid>,
    body: web::Json<ProfileUpdateRequest>,
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

    let update = body.into_inner().form_input.into();

    match state.profile_service.update(id, update).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(DomainError::NotFound { .. }) => {
            HttpResponse::BadRequest().json("Unable to update user")
        }
        Err(error) => {
            log::error!("profile update failed: {:?}", error);
            match &error {
                DomainError::Store(_) => {
                    HttpResponse::InternalServerError().json("Internal server error")
                }
                _ => HttpResponse::BadRequest().json("Error updating user"),
            }
        }
    }
}
