//! Handler for POST /signin
//!
//! The route is dual-mode for compatibility with the existing client:
//!
//! - No `authorization` header: body credentials are checked and a fresh
//!   session is established. Response: `{"success":"true","userId":…,"token":…}`.
//! - `authorization` header present: the held token is resolved against
//!   the session store. Response: `{"id":…}`.
//!
//! Internally these are two distinct operations (`login` and `whoami`);
//! only the HTTP surface multiplexes them. Note the header path answers
//! 400 (not 401) on an invalid token. The gate middleware owns the 401s
//! on protected routes, while this endpoint keeps the original client's
//! contract.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use fr_core::errors::{AuthError, DomainError};
use fr_core::repositories::{CredentialRepository, UserRepository};
use fr_core::services::session::SessionStore;

use crate::dto::auth_dto::{SignInRequest, SignInResponse, WhoAmIResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

pub async fn signin<C, U, S>(
    req: HttpRequest,
    state: web::Data<AppState<C, U, S>>,
    body: Option<web::Json<SignInRequest>>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    // Token path: the caller is asking "who am I" with an existing session
    if let Some(token) = held_token(&req) {
        return match state.session_service.whoami(&token).await {
            Ok(user_id) => HttpResponse::Ok().json(WhoAmIResponse { id: user_id }),
            Err(DomainError::Auth(AuthError::Unauthorized)) => {
                HttpResponse::BadRequest().json("Unauthorized")
            }
            Err(other) => handle_domain_error(other),
        };
    }

    // Credentials path: a malformed or missing body gets the same answer
    // as wrong credentials, to keep the endpoint unprobeable
    let request = match body {
        Some(json) if json.validate().is_ok() => json.into_inner(),
        _ => return HttpResponse::BadRequest().json("Wrong credentials"),
    };

    match state
        .session_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(SignInResponse::new(session.user_id, session.token)),
        Err(error) => handle_domain_error(error),
    }
}

fn held_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get("authorization")?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
