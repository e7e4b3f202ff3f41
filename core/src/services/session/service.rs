//! Session manager orchestrating credential verification, token issuance,
//! and session registration.

use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use fr_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::credential::Credential;
use crate::domain::entities::user::User;
use crate::domain::value_objects::Session;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{CredentialRepository, UserRepository};
use crate::services::password::PasswordVerifier;
use crate::services::token::TokenService;

use super::config::SessionConfig;
use super::store::SessionStore;

/// Session manager for the sign-in, whoami, and registration flows
pub struct SessionService<C, U, S>
where
    C: CredentialRepository,
    U: UserRepository,
    S: SessionStore,
{
    /// Credential store lookups and transactional registration
    credential_repository: Arc<C>,
    /// User store, read for id and email at sign-in
    user_repository: Arc<U>,
    /// Token-to-user-id session store; the authority on session validity
    session_store: Arc<S>,
    /// Token minting and signature checks
    token_service: Arc<TokenService>,
    /// One-way password verification
    password_verifier: PasswordVerifier,
    /// Service configuration
    config: SessionConfig,
}

impl<C, U, S> SessionService<C, U, S>
where
    C: CredentialRepository,
    U: UserRepository,
    S: SessionStore,
{
    /// Create a new session service
    ///
    /// # Arguments
    ///
    /// * `credential_repository` - Credential store
    /// * `user_repository` - User store
    /// * `session_store` - Expiring token-to-identity store
    /// * `token_service` - Token issuer
    /// * `password_verifier` - Credential verifier
    /// * `config` - Service configuration
    pub fn new(
        credential_repository: Arc<C>,
        user_repository: Arc<U>,
        session_store: Arc<S>,
        token_service: Arc<TokenService>,
        password_verifier: PasswordVerifier,
        config: SessionConfig,
    ) -> Self {
        Self {
            credential_repository,
            user_repository,
            session_store,
            token_service,
            password_verifier,
            config,
        }
    }

    /// Sign in with email and password, establishing a new session
    ///
    /// This method:
    /// 1. Normalizes the email (trim + lowercase)
    /// 2. Looks up the credential; a missing record fails exactly like a
    ///    wrong password
    /// 3. Verifies the password against the stored hash
    /// 4. Looks up the user record for the id
    /// 5. Mints a signed token and registers it in the session store with
    ///    the configured TTL
    ///
    /// Every sign-in produces a fresh token; prior sessions of the same
    /// user stay valid until their own expiry.
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - The user id, the new token, and its lifetime
    /// * `Err(DomainError)` - `InvalidCredentials` on any mismatch, or a
    ///   store fault surfaced as such
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<Session> {
        // Step 1: Canonical email form for both store lookups
        let email = normalize_email(email);

        // Step 2: Credential lookup; store faults propagate untranslated
        let credential = match self.credential_repository.find_by_email(&email).await? {
            Some(credential) => credential,
            None => {
                info!("sign-in rejected for {}: no credential", mask_email(&email));
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        // Step 3: One-way verification; the verifier fails closed
        if !self
            .password_verifier
            .verify(password, &credential.password_hash)
        {
            info!("sign-in rejected for {}: bad password", mask_email(&email));
            return Err(AuthError::InvalidCredentials.into());
        }

        // Step 4: Resolve the identity. A credential without a user row
        // cannot happen through transactional registration; if it does,
        // fail closed rather than crash.
        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                error!(
                    "data integrity anomaly: credential without user record for {}",
                    mask_email(&email)
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        // Step 5: Mint the token and register the session. A session-store
        // failure here is the caller's problem, not a silent success.
        let token = self.token_service.issue(&email)?;
        self.session_store
            .set(&token, user.id, self.config.session_ttl_seconds)
            .await?;

        info!("session established for {}", mask_email(&email));
        Ok(Session::new(
            user.id,
            token,
            self.config.session_ttl_seconds,
        ))
    }

    /// Resolve an existing token to the user id it was issued for
    ///
    /// The signature is checked first to reject forgeries locally, but the
    /// session store remains the authority: a validly signed token with no
    /// store entry is expired or was never registered, and is rejected.
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The session's user id
    /// * `Err(DomainError)` - `Unauthorized` for unknown or expired
    ///   tokens, or a store fault surfaced as such
    pub async fn whoami(&self, token: &str) -> DomainResult<Uuid> {
        if self.token_service.verify(token).is_err() {
            return Err(AuthError::Unauthorized.into());
        }

        match self.session_store.get(token).await? {
            Some(user_id) => Ok(user_id),
            None => Err(AuthError::Unauthorized.into()),
        }
    }

    /// Register a new account
    ///
    /// Validates the input, hashes the password, and writes the credential
    /// and the user record in one transaction, both rows or neither.
    /// Registration does not establish a session; the client signs in
    /// afterwards.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created user record
    /// * `Err(DomainError)` - Validation failure, `EmailTaken`, or a store
    ///   fault
    pub async fn register(&self, email: &str, name: &str, password: &str) -> DomainResult<User> {
        let email = normalize_email(email);

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if password.len() < self.config.min_password_length {
            return Err(ValidationError::TooShort {
                field: "password".to_string(),
                min: self.config.min_password_length,
            }
            .into());
        }

        let password_hash = self.password_verifier.hash(password)?;
        let credential = Credential::new(email.clone(), password_hash);
        let user = User::new(email.clone(), name.trim().to_string());

        let created = self
            .credential_repository
            .create_with_user(credential, user)
            .await
            .map_err(|e| {
                if let DomainError::Auth(AuthError::EmailTaken) = &e {
                    warn!("registration rejected for {}: taken", mask_email(&email));
                }
                e
            })?;

        info!("registered {}", mask_email(&email));
        Ok(created)
    }
}
