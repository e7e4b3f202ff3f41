//! Session token claims for signed bearer tokens.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the session token payload
///
/// The expiry claim mirrors the session store TTL and is informational:
/// the session store lookup is the authoritative validity check, and a
/// token with a valid signature but no store entry is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (the account email)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Token ID (unique identifier for the token)
    pub jti: String,
}

impl SessionClaims {
    /// Creates new claims for a session token
    ///
    /// # Arguments
    ///
    /// * `email` - The account email embedded as the subject
    /// * `ttl_seconds` - Token lifetime, mirroring the session store TTL
    /// * `issuer` - Issuer claim value
    pub fn new(email: &str, ttl_seconds: u64, issuer: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds as i64);

        Self {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_claims() {
        let claims = SessionClaims::new("a@b.com", 172_800, "facerank");

        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.iss, "facerank");
        assert_eq!(claims.exp - claims.iat, 172_800);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = SessionClaims::new("a@b.com", 60, "facerank");

        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_each_token_gets_a_fresh_jti() {
        let a = SessionClaims::new("a@b.com", 60, "facerank");
        let b = SessionClaims::new("a@b.com", 60, "facerank");
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = SessionClaims::new("a@b.com", 60, "facerank");

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: SessionClaims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
