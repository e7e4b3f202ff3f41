//! In-memory session store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::StoreError;

use super::store::SessionStore;

/// In-memory `SessionStore` with real expiration semantics
///
/// Used by tests and by local development without Redis. Expiry is checked
/// on read, so a zero TTL makes an entry immediately invisible, the same
/// observable behavior as the Redis store.
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<String, (Uuid, Instant)>>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live entries (expired entries are not counted)
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries.values().filter(|(_, deadline)| *deadline > now).count()
    }

    /// True when no live entry exists
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn set(&self, token: &str, user_id: Uuid, ttl_seconds: u64) -> Result<(), StoreError> {
        let deadline = Instant::now() + Duration::from_secs(ttl_seconds);
        let mut entries = self.entries.write().await;
        entries.insert(token.to_string(), (user_id, deadline));
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Uuid>, StoreError> {
        let entries = self.entries.read().await;
        match entries.get(token) {
            Some((user_id, deadline)) if *deadline > Instant::now() => Ok(Some(*user_id)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = InMemorySessionStore::new();
        let user_id = Uuid::new_v4();

        store.set("token-1", user_id, 60).await.unwrap();
        assert_eq!(store.get("token-1").await.unwrap(), Some(user_id));
    }

    #[tokio::test]
    async fn test_unknown_token_is_absent() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_zero_ttl_expires_immediately() {
        let store = InMemorySessionStore::new();
        let user_id = Uuid::new_v4();

        store.set("token-1", user_id, 0).await.unwrap();
        assert_eq!(store.get("token-1").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_one_user_many_tokens() {
        let store = InMemorySessionStore::new();
        let user_id = Uuid::new_v4();

        store.set("token-1", user_id, 60).await.unwrap();
        store.set("token-2", user_id, 60).await.unwrap();

        assert_eq!(store.get("token-1").await.unwrap(), Some(user_id));
        assert_eq!(store.get("token-2").await.unwrap(), Some(user_id));
        assert_eq!(store.len().await, 2);
    }
}
