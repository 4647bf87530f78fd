//! Uploaded payment-screenshot records

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One uploaded payment screenshot
#[derive(Debug, Clone, Deserialize)]
pub struct Screenshot {
    #[serde(rename = "_id")]
    pub id: String,
    /// Public URL of the stored image
    #[serde(rename = "screen_shot")]
    pub url: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Envelope for `clients/get-screenshot`
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenshotResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "screen_shot")]
    pub screenshots: Vec<Screenshot>,
}
