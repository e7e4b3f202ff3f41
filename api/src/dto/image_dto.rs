//! Image submission DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `PUT /image`: the user whose entry count increments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntryRequest {
    pub id: Uuid,
}

/// Body of `POST /imageurl`: the image to run detection on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrlRequest {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
