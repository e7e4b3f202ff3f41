//! Bcrypt-backed credential verification.

use tracing::warn;

use crate::errors::{DomainError, DomainResult};

/// One-way password verification and hashing
///
/// Verification fails closed: a corrupt or malformed stored hash is
/// reported as a non-match, never as an error that could bypass the check.
/// The plaintext password is never logged or persisted.
#[derive(Debug, Clone)]
pub struct PasswordVerifier {
    cost: u32,
}

impl PasswordVerifier {
    /// Create a verifier hashing with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Check a submitted plaintext password against a stored hash
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        match bcrypt::verify(plaintext, stored_hash) {
            Ok(matched) => matched,
            Err(e) => {
                // Corrupt hash in the store; treated as a non-match
                warn!("password verification failed on malformed hash: {}", e);
                false
            }
        }
    }

    /// Hash a plaintext password for storage
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            warn!("password hashing failed: {}", e);
            DomainError::Internal {
                message: "password hashing failed".to_string(),
            }
        })
    }
}

impl Default for PasswordVerifier {
    fn default() -> Self {
        Self::new(fr_shared::config::auth::DEFAULT_BCRYPT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low cost keeps the tests fast; production cost comes from config
    fn verifier() -> PasswordVerifier {
        PasswordVerifier::new(4)
    }

    #[test]
    fn test_hash_then_verify_round_trip() {
        let verifier = verifier();
        let hash = verifier.hash("longpassword1").unwrap();

        assert!(verifier.verify("longpassword1", &hash));
        assert!(!verifier.verify("wrongpassword", &hash));
    }

    #[test]
    fn test_corrupt_hash_fails_closed() {
        let verifier = verifier();

        assert!(!verifier.verify("anything", "not-a-bcrypt-hash"));
        assert!(!verifier.verify("anything", ""));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let verifier = verifier();
        let a = verifier.hash("longpassword1").unwrap();
        let b = verifier.hash("longpassword1").unwrap();

        // Bcrypt salts per hash
        assert_ne!(a, b);
    }
}
