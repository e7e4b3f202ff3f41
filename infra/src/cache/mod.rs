//! Cache module for the Redis-backed session store
//!
//! This module provides the Redis client used for session records and for
//! the rate-limiting counters in the API layer.

pub mod redis_client;
pub mod session_store;

pub use redis_client::RedisClient;
pub use session_store::RedisSessionStore;
