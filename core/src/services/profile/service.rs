//! Profile fetch, update, and entry counting over the user repository.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::ProfileUpdate;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Profile operations for authenticated users
///
/// Ownership is enforced at the API boundary (the gate's resolved user id
/// must match the addressed profile); this service only touches the store.
pub struct ProfileService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> ProfileService<U> {
    /// Create a new profile service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Fetch a user's profile
    pub async fn get(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })
    }

    /// Apply a partial profile update and return the updated record
    pub async fn update(&self, id: Uuid, update: ProfileUpdate) -> DomainResult<User> {
        self.user_repository
            .update_profile(id, update)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })
    }

    /// Record one processed image submission and return the new count
    pub async fn record_entry(&self, id: Uuid) -> DomainResult<i64> {
        self.user_repository
            .increment_entries(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })
    }
}
