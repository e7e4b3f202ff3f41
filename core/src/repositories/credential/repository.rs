//! Credential repository trait defining the interface for the credential store.

use async_trait::async_trait;

use crate::domain::entities::credential::Credential;
use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Repository trait for credential persistence
///
/// The credential store owns the `email → password_hash` association.
/// Implementations must treat I/O failures as `StoreError::Credential` so
/// callers can distinguish an outage from a missing record.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find a credential by normalized email
    ///
    /// # Returns
    /// * `Ok(Some(Credential))` - Credential found
    /// * `Ok(None)` - No credential registered for this email
    /// * `Err(DomainError)` - Store I/O failure
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Credential>>;

    /// Create a credential and its user record atomically
    ///
    /// Registration writes both rows in one transaction: either both exist
    /// afterwards or neither does. A duplicate email fails the whole
    /// operation with `AuthError::EmailTaken`.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user record
    /// * `Err(DomainError)` - Duplicate email or store I/O failure
    async fn create_with_user(&self, credential: Credential, user: User) -> DomainResult<User>;
}
