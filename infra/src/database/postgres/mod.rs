//! PostgreSQL repository implementations.

pub mod credential_repository_impl;
pub mod user_repository_impl;

pub use credential_repository_impl::PgCredentialRepository;
pub use user_repository_impl::PgUserRepository;
