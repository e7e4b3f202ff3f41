//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::ProfileUpdate;
use crate::errors::{DomainResult, StoreError};

use super::repository::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    unavailable: Arc<RwLock<bool>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            unavailable: Arc::new(RwLock::new(false)),
        }
    }

    /// Insert a user directly, bypassing registration
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Remove a user directly
    pub async fn remove(&self, id: Uuid) {
        self.users.write().await.remove(&id);
    }

    /// Toggle simulated store outage
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    async fn check_available(&self) -> DomainResult<()> {
        if *self.unavailable.read().await {
            return Err(StoreError::Credential("simulated outage".to_string()).into());
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.check_available().await?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.check_available().await?;
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> DomainResult<Option<User>> {
        self.check_available().await?;
        let mut users = self.users.write().await;

        match users.get_mut(&id) {
            Some(user) => {
                user.apply_profile_update(&update);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn increment_entries(&self, id: Uuid) -> DomainResult<Option<i64>> {
        self.check_available().await?;
        let mut users = self.users.write().await;

        match users.get_mut(&id) {
            Some(user) => {
                user.record_entry();
                Ok(Some(user.entries))
            }
            None => Ok(None),
        }
    }
}
