//! Request-gating middleware, composed in a fixed order:
//! rate limiting, then input validation in the handlers' extractors, then
//! the session auth gate, then the handler.

pub mod auth;
pub mod cors;
pub mod rate_limit;
