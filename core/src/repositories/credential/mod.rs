//! Credential repository interface and test double.

pub mod mock;
pub mod repository;

pub use mock::MockCredentialRepository;
pub use repository::CredentialRepository;
