//! Configuration for the session service

/// Configuration for the session service
///
/// Explicit state passed at construction so the TTL is fixable in tests.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session lifetime in seconds; every stored token expires after this
    /// interval with no refresh-on-use
    pub session_ttl_seconds: u64,
    /// Minimum accepted password length at registration
    pub min_password_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_ttl_seconds: fr_shared::config::auth::DEFAULT_SESSION_TTL_SECONDS,
            min_password_length: 8,
        }
    }
}

impl SessionConfig {
    /// Override the session TTL
    pub fn with_ttl(mut self, seconds: u64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }
}
