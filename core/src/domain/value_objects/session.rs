//! Session value object returned by a successful login.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An established session: the authenticated user and their bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user's id
    pub user_id: Uuid,

    /// Signed bearer token registered in the session store
    pub token: String,

    /// Seconds until the session store evicts the token
    pub expires_in: u64,
}

impl Session {
    /// Creates a new session value
    pub fn new(user_id: Uuid, token: String, expires_in: u64) -> Self {
        Self {
            user_id,
            token,
            expires_in,
        }
    }
}
