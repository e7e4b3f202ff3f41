//! Session store (Redis) configuration module

use serde::{Deserialize, Serialize};

/// Redis configuration for the session store and rate limiting counters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl CacheConfig {
    /// Create a cache configuration for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Load the cache configuration from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        Self {
            url,
            ..Default::default()
        }
    }
}

fn default_connection_timeout() -> u64 {
    5
}
