//! Shared fixtures for API integration tests.

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use fr_api::routes::AppState;
use fr_core::errors::StoreError;
use fr_core::repositories::{MockCredentialRepository, MockUserRepository};
use fr_core::services::password::PasswordVerifier;
use fr_core::services::profile::ProfileService;
use fr_core::services::recognition::{MockRecognitionService, RecognitionService};
use fr_core::services::session::{
    InMemorySessionStore, SessionConfig, SessionService, SessionStore,
};
use fr_core::services::token::{TokenConfig, TokenService};

/// Session store that fails every operation, simulating a Redis outage
pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn set(&self, _token: &str, _user_id: Uuid, _ttl: u64) -> Result<(), StoreError> {
        Err(StoreError::Session("connection refused".to_string()))
    }

    async fn get(&self, _token: &str) -> Result<Option<Uuid>, StoreError> {
        Err(StoreError::Session("connection refused".to_string()))
    }
}

/// Everything a test needs: the mocks, the store, and the app state
pub struct TestHarness<S: SessionStore + 'static> {
    pub users: Arc<MockUserRepository>,
    pub credentials: Arc<MockCredentialRepository>,
    pub store: Arc<S>,
    pub state: web::Data<AppState<MockCredentialRepository, MockUserRepository, S>>,
    pub gate_store: Arc<dyn SessionStore>,
}

/// Harness over the in-memory session store
pub fn harness() -> TestHarness<InMemorySessionStore> {
    harness_with(InMemorySessionStore::new(), false)
}

/// Harness with a custom store and optionally a failing recognition mock
pub fn harness_with<S: SessionStore + 'static>(
    store: S,
    failing_recognition: bool,
) -> TestHarness<S> {
    let users = Arc::new(MockUserRepository::new());
    let credentials = Arc::new(MockCredentialRepository::new(users.clone()));
    let store = Arc::new(store);

    let token_service = Arc::new(TokenService::new(TokenConfig {
        secret: "test-secret".to_string(),
        ttl_seconds: 60,
        issuer: "facerank".to_string(),
    }));

    let session_service = Arc::new(SessionService::new(
        credentials.clone(),
        users.clone(),
        store.clone(),
        token_service,
        PasswordVerifier::new(4),
        SessionConfig::default().with_ttl(60),
    ));
    let profile_service = Arc::new(ProfileService::new(users.clone()));
    let recognition_service: Arc<dyn RecognitionService> = if failing_recognition {
        Arc::new(MockRecognitionService::failing())
    } else {
        Arc::new(MockRecognitionService::new())
    };

    let gate_store: Arc<dyn SessionStore> = store.clone();
    let state = web::Data::new(AppState {
        session_service,
        profile_service,
        recognition_service,
    });

    TestHarness {
        users,
        credentials,
        store,
        state,
        gate_store,
    }
}

impl<S: SessionStore + 'static> TestHarness<S> {
    /// Register an account through the real service and return its user id
    pub async fn register(&self, email: &str, password: &str) -> Uuid {
        self.state
            .session_service
            .register(email, "Test User", password)
            .await
            .expect("registration must succeed in fixtures")
            .id
    }

    /// Register and sign in, returning `(user_id, token)`
    pub async fn signed_in_user(&self, email: &str, password: &str) -> (Uuid, String) {
        let id = self.register(email, password).await;
        let session = self
            .state
            .session_service
            .login(email, password)
            .await
            .expect("login must succeed in fixtures");
        (id, session.token)
    }
}
