//! Error types for the FaceRank domain layer.

pub mod domain_error;

pub use domain_error::{
    AuthError, DomainError, DomainResult, StoreError, TokenError, ValidationError,
};
