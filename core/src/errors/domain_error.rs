//! Domain-specific error types for authentication and related operations
//!
//! The taxonomy keeps authentication failures, token failures, and store
//! outages in distinct variants so that the API layer can map them to
//! different status codes: a session-store outage must never be reported
//! as bad credentials, and vice versa.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong email or password, or no matching credential. One variant for
    /// all three cases so responses cannot be used for user enumeration.
    #[error("Wrong credentials")]
    InvalidCredentials,

    /// Missing, unknown, or expired session token
    #[error("Unauthorized")]
    Unauthorized,

    /// Registration attempted with an email that already has a credential
    #[error("Email already registered")]
    EmailTaken,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token generation failed")]
    IssueFailed,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    Expired,
}

/// Store I/O failures, split by fault domain
///
/// Both variants surface as server-side faults. The distinction exists so
/// operators can tell a session-store outage apart from a credential-store
/// outage in logs without either being mistaken for an auth failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Session(String),

    #[error("credential store unavailable: {0}")]
    Credential(String),
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid length for field: {field} (minimum: {min})")]
    TooShort { field: String, min: usize },
}

/// Unified error type crossing the domain boundary
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Convenience alias used throughout the services
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// True when the error is a store outage rather than a client fault
    pub fn is_store_fault(&self) -> bool {
        matches!(self, DomainError::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // The same message covers missing records and wrong passwords
        let error = AuthError::InvalidCredentials;
        assert_eq!(error.to_string(), "Wrong credentials");
    }

    #[test]
    fn test_store_error_is_not_an_auth_error() {
        let error: DomainError = StoreError::Session("connection refused".to_string()).into();
        assert!(error.is_store_fault());

        let error: DomainError = AuthError::Unauthorized.into();
        assert!(!error.is_store_fault());
    }

    #[test]
    fn test_store_fault_domains_are_distinct() {
        let session = StoreError::Session("timeout".to_string());
        let credential = StoreError::Credential("timeout".to_string());
        assert_ne!(session, credential);
        assert!(session.to_string().starts_with("session store"));
        assert!(credential.to_string().starts_with("credential store"));
    }
}
