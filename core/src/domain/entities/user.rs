//! User entity representing a registered account in the FaceRank system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// Created together with its credential in a single registration
/// transaction. The session subsystem reads only `id` and `email`; the
/// profile and image endpoints mutate the remaining fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, stored lowercased and unique
    pub email: String,

    /// Display name
    pub name: String,

    /// Number of image submissions processed for this user
    pub entries: i64,

    /// Timestamp when the account was created
    pub joined: DateTime<Utc>,

    /// Optional profile field
    pub age: Option<i32>,

    /// Optional profile field
    pub pet: Option<String>,
}

impl User {
    /// Creates a new User instance with a fresh id and zero entries
    pub fn new(email: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            entries: 0,
            joined: Utc::now(),
            age: None,
            pet: None,
        }
    }

    /// Records one processed image submission
    pub fn record_entry(&mut self) {
        self.entries += 1;
    }

    /// Applies a partial profile update
    pub fn apply_profile_update(&mut self, update: &crate::domain::value_objects::ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(pet) = &update.pet {
            self.pet = Some(pet.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProfileUpdate;

    #[test]
    fn test_new_user_creation() {
        let user = User::new("a@b.com".to_string(), "Ann".to_string());

        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.name, "Ann");
        assert_eq!(user.entries, 0);
        assert!(user.age.is_none());
        assert!(user.pet.is_none());
    }

    #[test]
    fn test_record_entry() {
        let mut user = User::new("a@b.com".to_string(), "Ann".to_string());

        user.record_entry();
        user.record_entry();
        assert_eq!(user.entries, 2);
    }

    #[test]
    fn test_apply_profile_update_keeps_absent_fields() {
        let mut user = User::new("a@b.com".to_string(), "Ann".to_string());
        user.pet = Some("cat".to_string());

        user.apply_profile_update(&ProfileUpdate {
            name: Some("Anna".to_string()),
            age: Some(30),
            pet: None,
        });

        assert_eq!(user.name, "Anna");
        assert_eq!(user.age, Some(30));
        assert_eq!(user.pet, Some("cat".to_string()));
    }

    #[test]
    fn test_distinct_users_have_distinct_ids() {
        let a = User::new("a@b.com".to_string(), "A".to_string());
        let b = User::new("b@b.com".to_string(), "B".to_string());
        assert_ne!(a.id, b.id);
    }
}
