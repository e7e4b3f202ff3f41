//! Mock implementation of CredentialRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::credential::Credential;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult, StoreError};
use crate::repositories::user::MockUserRepository;

use super::repository::CredentialRepository;

/// Mock credential repository for testing
///
/// Shares a `MockUserRepository` so that `create_with_user` behaves like
/// the real transactional registration: both records become visible
/// together. An outage flag lets tests simulate a credential-store failure.
pub struct MockCredentialRepository {
    credentials: Arc<RwLock<HashMap<String, Credential>>>,
    users: Arc<MockUserRepository>,
    unavailable: Arc<RwLock<bool>>,
}

impl MockCredentialRepository {
    /// Create a mock repository backed by the given user repository
    pub fn new(users: Arc<MockUserRepository>) -> Self {
        Self {
            credentials: Arc::new(RwLock::new(HashMap::new())),
            users,
            unavailable: Arc::new(RwLock::new(false)),
        }
    }

    /// Toggle simulated store outage
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    /// Insert a credential directly, bypassing registration
    pub async fn insert(&self, credential: Credential) {
        self.credentials
            .write()
            .await
            .insert(credential.email.clone(), credential);
    }

    async fn check_available(&self) -> DomainResult<()> {
        if *self.unavailable.read().await {
            return Err(StoreError::Credential("simulated outage".to_string()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialRepository for MockCredentialRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Credential>> {
        self.check_available().await?;
        let credentials = self.credentials.read().await;
        Ok(credentials.get(email).cloned())
    }

    async fn create_with_user(&self, credential: Credential, user: User) -> DomainResult<User> {
        self.check_available().await?;
        let mut credentials = self.credentials.write().await;

        if credentials.contains_key(&credential.email) {
            return Err(AuthError::EmailTaken.into());
        }

        credentials.insert(credential.email.clone(), credential);
        self.users.insert(user.clone()).await;
        Ok(user)
    }
}
