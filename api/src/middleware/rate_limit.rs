//! Rate limiting middleware for API endpoints
//!
//! Redis-backed per-IP counters, applied ahead of validation and the auth
//! gate. Sign-in gets its own, tighter limit to slow credential stuffing;
//! everything else shares the general per-IP budget. The limiter is an
//! abuse brake rather than a security gate, so counter failures log a
//! warning and let the request through; the session gate still fails
//! closed on its own store.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error, HttpResponse, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use redis::{AsyncCommands, Client};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use fr_shared::config::RateLimitConfig;

/// Rejection returned when a counter exceeds its limit
#[derive(Debug)]
struct TooManyRequests;

impl std::fmt::Display for TooManyRequests {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Too many requests")
    }
}

impl ResponseError for TooManyRequests {
    fn status_code(&self) -> StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::TooManyRequests().json("Too many requests")
    }
}

/// Rate limiter middleware factory
pub struct RateLimiter {
    client: Option<Arc<Client>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    /// Create a rate limiter backed by the given Redis client
    pub fn new(client: Arc<Client>, config: RateLimitConfig) -> Self {
        Self {
            client: Some(client),
            config,
        }
    }

    /// Create a pass-through limiter (tests, local development)
    pub fn disabled() -> Self {
        Self {
            client: None,
            config: RateLimitConfig {
                enabled: false,
                ..RateLimitConfig::default()
            },
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            client: self.client.clone(),
            config: self.config.clone(),
        }))
    }
}

/// Rate limiter middleware service
pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    client: Option<Arc<Client>>,
    config: RateLimitConfig,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let client = self.client.clone();
        let config = self.config.clone();

        Box::pin(async move {
            let client = match client {
                Some(client) if config.enabled => client,
                _ => return service.call(req).await,
            };

            let ip = get_client_ip(&req);
            let (key, limit) = if req.path() == "/signin" {
                (
                    format!("rate_limit:signin:{}", ip),
                    config.signin_per_ip_per_minute,
                )
            } else {
                (format!("rate_limit:api:{}", ip), config.api_per_ip_per_minute)
            };

            match check_rate_limit(&client, &key, limit, config.window_seconds).await {
                Ok(true) => service.call(req).await,
                Ok(false) => Err(TooManyRequests.into()),
                Err(e) => {
                    log::warn!("rate limit check failed, letting request through: {}", e);
                    service.call(req).await
                }
            }
        })
    }
}

/// Increment the counter for `key`; `Ok(false)` when the limit is exceeded
async fn check_rate_limit(
    client: &Arc<Client>,
    key: &str,
    limit: u32,
    window_seconds: u64,
) -> Result<bool, redis::RedisError> {
    let mut conn = client.get_multiplexed_async_connection().await?;

    let count: Option<u32> = conn.get(key).await?;

    match count {
        Some(current) if current >= limit => Ok(false),
        Some(_) => {
            let _: u32 = conn.incr(key, 1).await?;
            Ok(true)
        }
        None => {
            // First request in the window starts the counter and its expiry
            conn.set_ex::<_, _, ()>(key, 1u32, window_seconds).await?;
            Ok(true)
        }
    }
}

/// Get the client IP address from the request
fn get_client_ip(req: &ServiceRequest) -> String {
    // Prefer proxy headers when present
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            if let Some(ip) = forwarded_str.split(',').next() {
                return ip.trim().to_string();
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}
