//! Domain entities for users, credentials, and session tokens.

pub mod credential;
pub mod token;
pub mod user;

pub use credential::Credential;
pub use token::SessionClaims;
pub use user::User;
