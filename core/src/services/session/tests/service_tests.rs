//! Session service behavior tests.

use uuid::Uuid;

use crate::domain::entities::credential::Credential;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, StoreError, ValidationError};
use super::mocks::{fixture, fixture_with_store, FailingSessionStore};
use crate::services::session::SessionStore;

#[tokio::test]
async fn login_issues_token_resolvable_to_user_id() {
    let f = fixture();
    let user = f
        .service
        .register("a@b.com", "Ann", "longpassword1")
        .await
        .unwrap();

    let session = f.service.login("a@b.com", "longpassword1").await.unwrap();

    assert_eq!(session.user_id, user.id);
    assert!(!session.token.is_empty());
    assert_eq!(session.expires_in, 60);

    // The store resolves the token to the same user id
    assert_eq!(f.store.get(&session.token).await.unwrap(), Some(user.id));
    assert_eq!(f.service.whoami(&session.token).await.unwrap(), user.id);
}

#[tokio::test]
async fn login_with_wrong_password_is_invalid_credentials() {
    let f = fixture();
    f.service
        .register("a@b.com", "Ann", "longpassword1")
        .await
        .unwrap();

    let result = f.service.login("a@b.com", "wrongpassword").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn login_with_unknown_email_is_invalid_credentials() {
    let f = fixture();

    // Same error as a wrong password, so callers cannot probe for accounts
    let result = f.service.login("nobody@b.com", "longpassword1").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn login_is_case_insensitive_on_email() {
    let f = fixture();
    f.service
        .register("user@example.com", "Ann", "longpassword1")
        .await
        .unwrap();

    let session = f.service.login("User@Example.Com", "longpassword1").await;
    assert!(session.is_ok());
}

#[tokio::test]
async fn repeated_logins_mint_distinct_concurrently_valid_tokens() {
    let f = fixture();
    let user = f
        .service
        .register("a@b.com", "Ann", "longpassword1")
        .await
        .unwrap();

    let first = f.service.login("a@b.com", "longpassword1").await.unwrap();
    let second = f.service.login("a@b.com", "longpassword1").await.unwrap();

    assert_ne!(first.token, second.token);

    // No single-session-per-user constraint: both stay valid
    assert_eq!(f.service.whoami(&first.token).await.unwrap(), user.id);
    assert_eq!(f.service.whoami(&second.token).await.unwrap(), user.id);
}

#[tokio::test]
async fn whoami_rejects_unknown_and_garbage_tokens() {
    let f = fixture();

    let result = f.service.whoami("garbage-token").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::Unauthorized))
    ));
}

#[tokio::test]
async fn whoami_rejects_signed_token_absent_from_store() {
    let f = fixture();
    let user = f
        .service
        .register("a@b.com", "Ann", "longpassword1")
        .await
        .unwrap();

    let session = f.service.login("a@b.com", "longpassword1").await.unwrap();

    // Simulate expiry by replacing the entry with a zero-TTL one: the
    // signature is still valid, but the store no longer vouches for it
    f.store.set(&session.token, user.id, 0).await.unwrap();

    let result = f.service.whoami(&session.token).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::Unauthorized))
    ));
}

#[tokio::test]
async fn corrupt_stored_hash_fails_closed() {
    let f = fixture();
    let user = User::new("a@b.com".to_string(), "Ann".to_string());
    f.users.insert(user).await;
    f.credentials
        .insert(Credential::new(
            "a@b.com".to_string(),
            "definitely-not-bcrypt".to_string(),
        ))
        .await;

    let result = f.service.login("a@b.com", "longpassword1").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn credential_without_user_record_fails_closed() {
    let f = fixture();
    let user = f
        .service
        .register("a@b.com", "Ann", "longpassword1")
        .await
        .unwrap();

    // Break the invariant registration normally guarantees
    f.users.remove(user.id).await;

    let result = f.service.login("a@b.com", "longpassword1").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn session_store_outage_is_not_invalid_credentials() {
    let f = fixture_with_store(FailingSessionStore);
    f.service
        .register("a@b.com", "Ann", "longpassword1")
        .await
        .unwrap();

    // Credentials are fine; only the session registration fails. The
    // error must be a store fault, not an auth failure.
    let result = f.service.login("a@b.com", "longpassword1").await;
    assert!(matches!(
        result,
        Err(DomainError::Store(StoreError::Session(_)))
    ));
}

#[tokio::test]
async fn session_store_outage_on_whoami_is_not_unauthorized() {
    let f = fixture_with_store(FailingSessionStore);

    // Any well-formed token will do; signature passes, store errors out
    let token = {
        let ok = fixture();
        ok.service
            .register("a@b.com", "Ann", "longpassword1")
            .await
            .unwrap();
        ok.service
            .login("a@b.com", "longpassword1")
            .await
            .unwrap()
            .token
    };

    let result = f.service.whoami(&token).await;
    assert!(matches!(
        result,
        Err(DomainError::Store(StoreError::Session(_)))
    ));
}

#[tokio::test]
async fn credential_store_outage_surfaces_as_store_fault() {
    let f = fixture();
    f.credentials.set_unavailable(true).await;

    let result = f.service.login("a@b.com", "longpassword1").await;
    assert!(matches!(
        result,
        Err(DomainError::Store(StoreError::Credential(_)))
    ));
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let f = fixture();
    f.service
        .register("a@b.com", "Ann", "longpassword1")
        .await
        .unwrap();

    let result = f.service.register("A@B.com", "Ann II", "longpassword2").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailTaken))
    ));
}

#[tokio::test]
async fn register_validates_input() {
    let f = fixture();

    assert!(matches!(
        f.service.register("not-an-email", "Ann", "longpassword1").await,
        Err(DomainError::Validation(ValidationError::InvalidEmail))
    ));
    assert!(matches!(
        f.service.register("a@b.com", "   ", "longpassword1").await,
        Err(DomainError::Validation(ValidationError::RequiredField { .. }))
    ));
    assert!(matches!(
        f.service.register("a@b.com", "Ann", "short").await,
        Err(DomainError::Validation(ValidationError::TooShort { .. }))
    ));
}

#[tokio::test]
async fn register_normalizes_email() {
    let f = fixture();
    let user = f
        .service
        .register("  User@Example.Com ", "Ann", "longpassword1")
        .await
        .unwrap();

    assert_eq!(user.email, "user@example.com");
    assert_ne!(user.id, Uuid::nil());
}
