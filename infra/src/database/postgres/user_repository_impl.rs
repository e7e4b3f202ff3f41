//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use fr_core::domain::entities::user::User;
use fr_core::domain::value_objects::ProfileUpdate;
use fr_core::errors::{DomainError, DomainResult, StoreError};
use fr_core::repositories::UserRepository;

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::postgres::PgRow) -> DomainResult<User> {
        Ok(User {
            id: row.try_get("id").map_err(|e| store_fault("id", e))?,
            email: row.try_get("email").map_err(|e| store_fault("email", e))?,
            name: row.try_get("name").map_err(|e| store_fault("name", e))?,
            entries: row
                .try_get("entries")
                .map_err(|e| store_fault("entries", e))?,
            joined: row
                .try_get::<DateTime<Utc>, _>("joined")
                .map_err(|e| store_fault("joined", e))?,
            age: row.try_get("age").map_err(|e| store_fault("age", e))?,
            pet: row.try_get("pet").map_err(|e| store_fault("pet", e))?,
        })
    }
}

fn store_fault(context: &str, e: impl std::fmt::Display) -> DomainError {
    StoreError::Credential(format!("{}: {}", context, e)).into()
}

const SELECT_USER: &str = r#"
    SELECT id, email, name, entries, joined, age, pet
    FROM users
"#;

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let query = format!("{} WHERE email = $1 LIMIT 1", SELECT_USER);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_fault("user lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let query = format!("{} WHERE id = $1 LIMIT 1", SELECT_USER);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_fault("user lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> DomainResult<Option<User>> {
        // COALESCE keeps columns whose update field is absent
        let query = r#"
            UPDATE users SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                pet = COALESCE($4, pet)
            WHERE id = $1
            RETURNING id, email, name, entries, joined, age, pet
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .bind(update.name)
            .bind(update.age)
            .bind(update.pet)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_fault("profile update failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn increment_entries(&self, id: Uuid) -> DomainResult<Option<i64>> {
        let query = r#"
            UPDATE users SET entries = entries + 1
            WHERE id = $1
            RETURNING entries
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_fault("entry increment failed", e))?;

        match result {
            Some(row) => Ok(Some(
                row.try_get("entries")
                    .map_err(|e| store_fault("entries", e))?,
            )),
            None => Ok(None),
        }
    }
}
