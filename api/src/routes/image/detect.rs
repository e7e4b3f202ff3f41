//! Handler for POST /imageurl
//!
//! Proxies the submitted image URL to the recognition provider and returns
//! the provider's payload untouched. The provider credentials never reach
//! the client; any upstream failure collapses into one opaque message.

use actix_web::{web, HttpResponse};

use fr_core::repositories::{CredentialRepository, UserRepository};
use fr_core::services::session::SessionStore;

use crate::dto::image_dto::ImageUrlRequest;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

pub async fn image_detect<C, U, S>(
    _ctx: AuthContext,
    state: web::Data<AppState<C, U, S>>,
    body: web::Json<ImageUrlRequest>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    match state.recognition_service.detect(&body.image_url).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(error) => {
            log::error!("recognition call failed: {:?}", error);
            HttpResponse::BadRequest().json("Unable to fetch or process image.")
        }
    }
}
