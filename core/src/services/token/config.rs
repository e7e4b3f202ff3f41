//! Configuration for the token service

/// Configuration for the token service
///
/// Passed in explicitly at construction; the signing secret is never read
/// from ambient global state, so tests can fix it for determinism.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Signing secret
    pub secret: String,
    /// Token lifetime in seconds, mirroring the session store TTL
    pub ttl_seconds: u64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            ttl_seconds: fr_shared::config::auth::DEFAULT_SESSION_TTL_SECONDS,
            issuer: "facerank".to_string(),
        }
    }
}

impl TokenConfig {
    /// Build the token configuration from the application auth config
    pub fn from_auth_config(auth: &fr_shared::config::AuthConfig) -> Self {
        Self {
            secret: auth.token_secret.clone(),
            ttl_seconds: auth.session_ttl_seconds,
            issuer: auth.issuer.clone(),
        }
    }
}
