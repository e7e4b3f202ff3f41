//! Integration tests for the Redis session store.
//!
//! These tests require a running Redis instance (REDIS_URL or the default
//! localhost address) and are ignored by default.

use uuid::Uuid;

use fr_core::services::session::SessionStore;
use fr_infra::cache::{RedisClient, RedisSessionStore};
use fr_shared::config::CacheConfig;

async fn store() -> RedisSessionStore {
    let config = CacheConfig::from_env();
    let client = RedisClient::new(&config)
        .await
        .expect("redis must be reachable for integration tests");
    RedisSessionStore::new(client)
}

#[tokio::test]
#[ignore] // Requires a running Redis
async fn set_then_get_round_trip() {
    let store = store().await;
    let user_id = Uuid::new_v4();
    let token = format!("it-{}", Uuid::new_v4());

    store.set(&token, user_id, 60).await.unwrap();
    assert_eq!(store.get(&token).await.unwrap(), Some(user_id));
}

#[tokio::test]
#[ignore] // Requires a running Redis
async fn unknown_token_is_absent() {
    let store = store().await;
    let token = format!("it-{}", Uuid::new_v4());

    assert_eq!(store.get(&token).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires a running Redis
async fn expired_token_disappears() {
    let store = store().await;
    let user_id = Uuid::new_v4();
    let token = format!("it-{}", Uuid::new_v4());

    store.set(&token, user_id, 1).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
    assert_eq!(store.get(&token).await.unwrap(), None);
}
