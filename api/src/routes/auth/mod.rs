//! Authentication route handlers
//!
//! - Sign-in (fresh credentials or an already-held session token)
//! - Registration

pub mod register;
pub mod signin;

pub use register::register;
pub use signin::signin;
