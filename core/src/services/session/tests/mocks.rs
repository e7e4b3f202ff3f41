//! Test fixtures for session service tests.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::repositories::{MockCredentialRepository, MockUserRepository};
use crate::services::password::PasswordVerifier;
use crate::services::session::{
    InMemorySessionStore, SessionConfig, SessionService, SessionStore,
};
use crate::services::token::{TokenConfig, TokenService};

/// Session store that fails every operation, simulating a Redis outage
pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn set(&self, _token: &str, _user_id: Uuid, _ttl: u64) -> Result<(), StoreError> {
        Err(StoreError::Session("connection refused".to_string()))
    }

    async fn get(&self, _token: &str) -> Result<Option<Uuid>, StoreError> {
        Err(StoreError::Session("connection refused".to_string()))
    }
}

pub struct Fixture<S: SessionStore> {
    pub credentials: Arc<MockCredentialRepository>,
    pub users: Arc<MockUserRepository>,
    pub store: Arc<S>,
    pub service: SessionService<MockCredentialRepository, MockUserRepository, S>,
}

/// Build a session service over the given store with a short test TTL
pub fn fixture_with_store<S: SessionStore>(store: S) -> Fixture<S> {
    let users = Arc::new(MockUserRepository::new());
    let credentials = Arc::new(MockCredentialRepository::new(users.clone()));
    let store = Arc::new(store);
    let token_service = Arc::new(TokenService::new(TokenConfig {
        secret: "test-secret".to_string(),
        ttl_seconds: 60,
        issuer: "facerank".to_string(),
    }));

    let service = SessionService::new(
        credentials.clone(),
        users.clone(),
        store.clone(),
        token_service,
        PasswordVerifier::new(4),
        SessionConfig::default().with_ttl(60),
    );

    Fixture {
        credentials,
        users,
        store,
        service,
    }
}

/// Default fixture over the in-memory store
pub fn fixture() -> Fixture<InMemorySessionStore> {
    fixture_with_store(InMemorySessionStore::new())
}
