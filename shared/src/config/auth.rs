//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Session lifetime applied to every issued token, in seconds (2 days).
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 172_800;

/// Bcrypt work factor used when hashing passwords at registration.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Authentication configuration
///
/// Carries the token signing secret and the session TTL as explicit state so
/// that services never read them from ambient globals. Tests construct this
/// directly with fixed values for deterministic behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for signing session tokens
    pub token_secret: String,

    /// Session lifetime in seconds; the session store evicts entries after
    /// this interval and token expiry claims mirror it
    pub session_ttl_seconds: u64,

    /// Token issuer claim
    pub issuer: String,

    /// Bcrypt cost for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::from("development-secret-please-change-in-production"),
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            issuer: String::from("facerank"),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    /// Create an authentication configuration with the given secret
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            ..Default::default()
        }
    }

    /// Override the session TTL
    pub fn with_session_ttl(mut self, seconds: u64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    /// Load the authentication configuration from environment variables
    pub fn from_env() -> Self {
        let token_secret = std::env::var("TOKEN_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let session_ttl_seconds = std::env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_SECONDS);

        Self {
            token_secret,
            session_ttl_seconds,
            ..Default::default()
        }
    }

    /// Check if the default secret is still in use (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.token_secret == "development-secret-please-change-in-production"
    }
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}
