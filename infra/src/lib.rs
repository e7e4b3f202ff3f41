//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the FaceRank
//! application. It provides concrete implementations for external
//! collaborators behind the domain interfaces:
//!
//! - **Database**: PostgreSQL repositories using SQLx (credential and
//!   user stores)
//! - **Cache**: Redis-backed session store with per-key expiration
//! - **Recognition**: HTTP client for the third-party image recognition
//!   API

pub mod cache;
pub mod database;
pub mod recognition;

use thiserror::Error;

/// Errors raised while constructing or probing infrastructure services
///
/// Request-path failures are translated into the domain's `StoreError`
/// fault domains instead; this type covers startup and health checks.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),
}
