//! Session store interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::StoreError;

/// Key-value store with per-key expiration, mapping `token → user id`
///
/// The store is the source of truth for session validity: an entry exists
/// exactly as long as its token is live. Entries expire on their own after
/// the TTL passed to `set`; there is no deletion path. `set` must be
/// atomic; concurrent sign-ins write distinct tokens, so last-writer-wins
/// per key is acceptable.
///
/// The trait is object-safe so the HTTP auth gate can hold it as
/// `Arc<dyn SessionStore>`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Register a session: `token → user_id`, evicted after `ttl_seconds`
    async fn set(&self, token: &str, user_id: Uuid, ttl_seconds: u64) -> Result<(), StoreError>;

    /// Resolve a token to the user id it was issued for
    ///
    /// # Returns
    /// * `Ok(Some(user_id))` - Live session
    /// * `Ok(None)` - Unknown or expired token
    /// * `Err(StoreError)` - Store I/O failure; callers must surface this
    ///   distinctly from an invalid token
    async fn get(&self, token: &str) -> Result<Option<Uuid>, StoreError>;
}
