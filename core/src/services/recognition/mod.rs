//! Image recognition service seam.

pub mod mock;

pub use mock::MockRecognitionService;

use async_trait::async_trait;

use crate::errors::DomainResult;

/// External image recognition API
///
/// The concrete implementation lives in the infrastructure layer; the
/// domain only needs "an image URL in, the provider's detection payload
/// out". The payload is passed through to the client untouched.
#[async_trait]
pub trait RecognitionService: Send + Sync {
    /// Run detection on a publicly reachable image URL
    async fn detect(&self, image_url: &str) -> DomainResult<serde_json::Value>;
}
