//! Route handlers, grouped by resource.

pub mod auth;
pub mod image;
pub mod profile;

use std::sync::Arc;

use fr_core::repositories::{CredentialRepository, UserRepository};
use fr_core::services::profile::ProfileService;
use fr_core::services::recognition::RecognitionService;
use fr_core::services::session::{SessionService, SessionStore};

/// Application state that holds the shared services
pub struct AppState<C, U, S>
where
    C: CredentialRepository,
    U: UserRepository,
    S: SessionStore,
{
    pub session_service: Arc<SessionService<C, U, S>>,
    pub profile_service: Arc<ProfileService<U>>,
    pub recognition_service: Arc<dyn RecognitionService>,
}
