//! Sign-in and registration DTOs.
//!
//! Field names stay camelCase on the wire for compatibility with the
//! existing web client.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Fresh-login response: the client stores the token for later requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    /// Legacy flag serialized as the string "true"
    pub success: String,
    pub user_id: Uuid,
    pub token: String,
}

impl SignInResponse {
    pub fn new(user_id: Uuid, token: String) -> Self {
        Self {
            success: "true".to_string(),
            user_id,
            token,
        }
    }
}

/// Already-authenticated response shape: just the session's user id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    pub id: Uuid,
}
