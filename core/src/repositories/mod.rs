//! Repository interfaces for the credential and user stores.

pub mod credential;
pub mod user;

pub use credential::{CredentialRepository, MockCredentialRepository};
pub use user::{MockUserRepository, UserRepository};
