//! Credential entity holding a user's password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credential record owned by the credential store
///
/// Created at registration in the same transaction as the user row and
/// never mutated afterwards. The `password_hash` field is opaque to every
/// component except the password verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Email address, stored lowercased and unique
    pub email: String,

    /// Bcrypt hash of the password
    pub password_hash: String,

    /// Timestamp when the credential was created
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Creates a new credential from a normalized email and a password hash
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_creation() {
        let credential = Credential::new("a@b.com".to_string(), "$2b$10$abc".to_string());
        assert_eq!(credential.email, "a@b.com");
        assert_eq!(credential.password_hash, "$2b$10$abc");
    }
}
