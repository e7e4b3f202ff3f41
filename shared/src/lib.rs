//! Shared utilities and common types for the FaceRank server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (email normalization and masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, RateLimitConfig, RecognitionConfig,
    ServerConfig,
};
pub use utils::email;
