//! Mock recognition service for testing

use async_trait::async_trait;

use crate::errors::{DomainError, DomainResult};

use super::RecognitionService;

/// Mock recognition service returning a canned payload
pub struct MockRecognitionService {
    fail: bool,
}

impl MockRecognitionService {
    /// Mock that answers every request with a fixed detection payload
    pub fn new() -> Self {
        Self { fail: false }
    }

    /// Mock that fails every request, simulating a provider outage
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl Default for MockRecognitionService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecognitionService for MockRecognitionService {
    async fn detect(&self, image_url: &str) -> DomainResult<serde_json::Value> {
        if self.fail {
            return Err(DomainError::Internal {
                message: "recognition provider unavailable".to_string(),
            });
        }

        Ok(serde_json::json!({
            "outputs": [{
                "input": { "data": { "image": { "url": image_url } } },
                "data": { "regions": [] }
            }]
        }))
    }
}
