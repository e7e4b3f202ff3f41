//! Image recognition API configuration

use serde::{Deserialize, Serialize};

/// Configuration for the third-party image recognition service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecognitionConfig {
    /// Personal access token for the recognition API
    pub api_key: String,

    /// Account user id
    pub user_id: String,

    /// Application id
    pub app_id: String,

    /// Model used for detection
    pub model_id: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            user_id: String::new(),
            app_id: String::new(),
            model_id: String::from("general-image-recognition"),
            base_url: default_base_url(),
        }
    }
}

impl RecognitionConfig {
    /// Load the recognition configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("RECOGNITION_API_KEY").unwrap_or_default(),
            user_id: std::env::var("RECOGNITION_USER_ID").unwrap_or_default(),
            app_id: std::env::var("RECOGNITION_APP_ID").unwrap_or_default(),
            model_id: std::env::var("RECOGNITION_MODEL_ID")
                .unwrap_or_else(|_| "general-image-recognition".to_string()),
            base_url: std::env::var("RECOGNITION_BASE_URL").unwrap_or_else(|_| default_base_url()),
        }
    }
}

fn default_base_url() -> String {
    String::from("https://api.clarifai.com")
}
