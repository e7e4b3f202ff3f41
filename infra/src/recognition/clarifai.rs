//! Clarifai model-outputs client.
//!
//! Fetches the submitted image, base64-encodes it, and posts it to the
//! configured model's outputs endpoint. The provider's JSON payload is
//! returned verbatim for the API layer to pass through.

use async_trait::async_trait;
use base64::Engine;
use serde_json::json;
use tracing::warn;

use fr_core::errors::{DomainError, DomainResult};
use fr_core::services::recognition::RecognitionService;
use fr_shared::config::RecognitionConfig;

/// HTTP client for the Clarifai recognition API
pub struct ClarifaiRecognitionService {
    config: RecognitionConfig,
    http: reqwest::Client,
}

impl ClarifaiRecognitionService {
    /// Create a recognition client from configuration
    pub fn new(config: RecognitionConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn outputs_url(&self) -> String {
        format!(
            "{}/v2/models/{}/outputs",
            self.config.base_url.trim_end_matches('/'),
            self.config.model_id
        )
    }

    fn provider_fault(context: &str, e: impl std::fmt::Display) -> DomainError {
        warn!("recognition request failed ({}): {}", context, e);
        DomainError::Internal {
            message: format!("recognition request failed: {}", context),
        }
    }
}

#[async_trait]
impl RecognitionService for ClarifaiRecognitionService {
    async fn detect(&self, image_url: &str) -> DomainResult<serde_json::Value> {
        // Fetch the image ourselves so the provider receives bytes, not a
        // URL it may be unable to reach
        let image_response = self
            .http
            .get(image_url)
            .send()
            .await
            .map_err(|e| Self::provider_fault("image fetch", e))?;

        if !image_response.status().is_success() {
            return Err(Self::provider_fault(
                "image fetch",
                format!("status {}", image_response.status()),
            ));
        }

        let image_bytes = image_response
            .bytes()
            .await
            .map_err(|e| Self::provider_fault("image read", e))?;

        let base64_image = base64::engine::general_purpose::STANDARD.encode(&image_bytes);

        let body = json!({
            "user_app_id": {
                "user_id": self.config.user_id,
                "app_id": self.config.app_id,
            },
            "inputs": [{
                "data": { "image": { "base64": base64_image } }
            }]
        });

        let response = self
            .http
            .post(self.outputs_url())
            .header("Accept", "application/json")
            .header("Authorization", format!("Key {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::provider_fault("model outputs", e))?;

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Self::provider_fault("response decode", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outputs_url_from_config() {
        let service = ClarifaiRecognitionService::new(RecognitionConfig {
            api_key: "key".to_string(),
            user_id: "user".to_string(),
            app_id: "app".to_string(),
            model_id: "general-image-recognition".to_string(),
            base_url: "https://api.clarifai.com/".to_string(),
        });

        assert_eq!(
            service.outputs_url(),
            "https://api.clarifai.com/v2/models/general-image-recognition/outputs"
        );
    }
}
