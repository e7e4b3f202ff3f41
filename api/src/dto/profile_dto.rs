//! Profile update DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /profile/{id}`, matching the web client's shape:
/// `{ "formInput": { "name": ..., "age": ..., "pet": ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    #[serde(rename = "formInput")]
    pub form_input: ProfileFormInput,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFormInput {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub pet: Option<String>,
}

impl From<ProfileFormInput> for fr_core::domain::value_objects::ProfileUpdate {
    fn from(input: ProfileFormInput) -> Self {
        Self {
            name: input.name,
            age: input.age,
            pet: input.pet,
        }
    }
}
