//! Payment-status timeline records

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One step of the repayment timeline
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Envelope for `clients/get-timeline`
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}
