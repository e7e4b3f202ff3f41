//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::ProfileUpdate;
use crate::errors::DomainResult;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers. I/O
/// failures map to `StoreError::Credential` (the relational store backs
/// both credentials and users).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by normalized email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Store I/O failure
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Apply a partial profile update
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The updated user
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Store I/O failure
    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> DomainResult<Option<User>>;

    /// Increment the user's submission count by one
    ///
    /// # Returns
    /// * `Ok(Some(entries))` - The new entry count
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Store I/O failure
    async fn increment_entries(&self, id: Uuid) -> DomainResult<Option<i64>>;
}
