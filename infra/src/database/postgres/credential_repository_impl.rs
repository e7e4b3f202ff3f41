//! PostgreSQL implementation of the CredentialRepository trait.
//!
//! Covers the `login` table and the transactional registration write that
//! creates a credential and its user record together.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use fr_core::domain::entities::credential::Credential;
use fr_core::domain::entities::user::User;
use fr_core::errors::{AuthError, DomainError, DomainResult, StoreError};
use fr_core::repositories::CredentialRepository;

/// PostgreSQL implementation of CredentialRepository
pub struct PgCredentialRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgCredentialRepository {
    /// Create a new PostgreSQL credential repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_credential(row: &sqlx::postgres::PgRow) -> DomainResult<Credential> {
        Ok(Credential {
            email: row
                .try_get("email")
                .map_err(|e| store_fault("email", e))?,
            password_hash: row
                .try_get("hash")
                .map_err(|e| store_fault("hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| store_fault("created_at", e))?,
        })
    }
}

fn store_fault(context: &str, e: impl std::fmt::Display) -> DomainError {
    StoreError::Credential(format!("{}: {}", context, e)).into()
}

/// Unique-violation SQLSTATE, raised when the email is already registered
const UNIQUE_VIOLATION: &str = "23505";

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION)
    )
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Credential>> {
        let query = r#"
            SELECT email, hash, created_at
            FROM login
            WHERE email = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_fault("credential lookup failed", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_credential(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_with_user(&self, credential: Credential, user: User) -> DomainResult<User> {
        // One transaction for both rows: a failure on either insert rolls
        // the whole registration back.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| store_fault("failed to open transaction", e))?;

        sqlx::query("INSERT INTO login (email, hash, created_at) VALUES ($1, $2, $3)")
            .bind(&credential.email)
            .bind(&credential.password_hash)
            .bind(credential.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Auth(AuthError::EmailTaken)
                } else {
                    store_fault("failed to create credential", e)
                }
            })?;

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, entries, joined, age, pet)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.entries)
        .bind(user.joined)
        .bind(user.age)
        .bind(&user.pet)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Auth(AuthError::EmailTaken)
            } else {
                store_fault("failed to create user", e)
            }
        })?;

        tx.commit()
            .await
            .map_err(|e| store_fault("failed to commit registration", e))?;

        Ok(user)
    }
}
