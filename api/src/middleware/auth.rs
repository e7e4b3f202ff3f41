//! Session authentication middleware for protecting API endpoints.
//!
//! The gate reads the raw token from the `authorization` header (the web
//! client sends the token verbatim, without a Bearer prefix) and resolves
//! it against the session store. The store is the sole authority here: no
//! signature check happens on this path, and a store hit neither refreshes
//! nor extends the entry's TTL.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    http::StatusCode,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use fr_core::services::session::SessionStore;

/// User authentication context injected into requests that pass the gate
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id the session store resolved the token to
    pub user_id: Uuid,
}

/// Gate rejections, each with its own status and client-facing body
///
/// `StoreFault` is distinct from the unauthorized variants: a session-store
/// outage must read as a server fault, not as a logged-out user.
#[derive(Debug)]
pub enum GateRejection {
    MissingToken,
    InvalidToken,
    StoreFault,
}

impl GateRejection {
    fn message(&self) -> &'static str {
        match self {
            GateRejection::MissingToken => "Unauthorized - no token provided",
            GateRejection::InvalidToken => "Unauthorized - invalid token",
            GateRejection::StoreFault => "Server error",
        }
    }
}

impl std::fmt::Display for GateRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl ResponseError for GateRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            GateRejection::MissingToken | GateRejection::InvalidToken => StatusCode::UNAUTHORIZED,
            GateRejection::StoreFault => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.message())
    }
}

/// Session authentication middleware factory
pub struct SessionAuth;

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Session authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => return Err(GateRejection::MissingToken.into()),
            };

            // The store is provided as trait-object app data so the gate
            // works against Redis in production and memory in tests
            let store = match req.app_data::<web::Data<Arc<dyn SessionStore>>>() {
                Some(store) => store.get_ref().clone(),
                None => {
                    log::error!("session store not configured in app data");
                    return Err(GateRejection::StoreFault.into());
                }
            };

            match store.get(&token).await {
                Ok(Some(user_id)) => {
                    req.extensions_mut().insert(AuthContext { user_id });
                    service.call(req).await
                }
                Ok(None) => Err(GateRejection::InvalidToken.into()),
                Err(e) => {
                    log::error!("session store lookup failed: {}", e);
                    Err(GateRejection::StoreFault.into())
                }
            }
        })
    }
}

/// Extracts the raw session token from the authorization header
fn extract_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Extractor for the authentication context a passed gate leaves behind
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| GateRejection::MissingToken.into());

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_extract_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "session-token-123"))
            .to_srv_request();
        assert_eq!(extract_token(&req), Some("session-token-123".to_string()));

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, ""))
            .to_srv_request();
        assert_eq!(extract_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_token(&req_no_header), None);
    }

    #[::core::prelude::v1::test]
    fn test_gate_rejection_statuses() {
        assert_eq!(
            GateRejection::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GateRejection::StoreFault.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
