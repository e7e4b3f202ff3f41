//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Max sign-in attempts per IP per minute
    pub signin_per_ip_per_minute: u32,

    /// Max requests per IP per minute across all endpoints
    pub api_per_ip_per_minute: u32,

    /// Counter window in seconds
    #[serde(default = "default_window")]
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            signin_per_ip_per_minute: 10,
            api_per_ip_per_minute: 60,
            window_seconds: default_window(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_window() -> u64 {
    60
}
