//! Partial profile change set.

use serde::{Deserialize, Serialize};

/// Fields a user may change on their own profile
///
/// Absent fields are left untouched by the update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    pub name: Option<String>,

    /// New age
    pub age: Option<i32>,

    /// New pet
    pub pet: Option<String>,
}

impl ProfileUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.pet.is_none()
    }
}
