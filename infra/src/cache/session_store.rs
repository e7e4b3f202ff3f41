//! Redis-backed session store.

use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use fr_core::errors::StoreError;
use fr_core::services::session::SessionStore;

use super::redis_client::RedisClient;

/// Redis implementation of the session store
///
/// Keys are the bare tokens (flat keyspace, no prefix) and values are the
/// user id as a uuid string, matching the wire contract of the session
/// subsystem. Expiration is delegated to Redis via SET EX; nothing ever
/// deletes a key explicitly.
pub struct RedisSessionStore {
    client: RedisClient,
}

impl RedisSessionStore {
    /// Create a session store over an existing Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn set(&self, token: &str, user_id: Uuid, ttl_seconds: u64) -> Result<(), StoreError> {
        self.client
            .set_with_expiry(token, &user_id.to_string(), ttl_seconds)
            .await
            .map_err(|e| {
                error!("session registration failed: {}", e);
                StoreError::Session(e.to_string())
            })?;

        debug!("session registered with ttl {}s", ttl_seconds);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Uuid>, StoreError> {
        let value = self.client.get(token).await.map_err(|e| {
            error!("session lookup failed: {}", e);
            StoreError::Session(e.to_string())
        })?;

        match value {
            Some(raw) => {
                // A non-uuid value means the keyspace is shared or corrupt;
                // treat the session as invalid rather than crashing
                match raw.parse::<Uuid>() {
                    Ok(user_id) => Ok(Some(user_id)),
                    Err(_) => {
                        error!("session entry holds a non-uuid value");
                        Ok(None)
                    }
                }
            }
            None => Ok(None),
        }
    }
}
