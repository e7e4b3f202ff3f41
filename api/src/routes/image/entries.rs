//! Handler for PUT /image
//!
//! Bumps the caller's submission count after a processed image and returns
//! the new count. The id in the body must be the session's own user.

use actix_web::{web, HttpResponse};

use fr_core::errors::DomainError;
use fr_core::repositories::{CredentialRepository, UserRepository};
use fr_core::services::session::SessionStore;

use crate::dto::image_dto::ImageEntryRequest;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

pub async fn image_entries<C, U, S>(
    ctx: AuthContext,
    state: web::Data<AppState<C, U, S>>,
    body: web::Json<ImageEntryRequest>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    if ctx.user_id != body.id {
        return HttpResponse::Forbidden().json("Forbidden");
    }

    match state.profile_service.record_entry(body.id).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(DomainError::NotFound { .. }) => {
            HttpResponse::BadRequest().json("Unable to get entries")
        }
        Err(error) => {
            log::error!("entry increment failed: {:?}", error);
            HttpResponse::InternalServerError().json("Internal server error")
        }
    }
}
