//! Scratch-card coupon records

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::decimal::Decimal;

/// A reward coupon; hidden until scratched
#[derive(Debug, Clone, Deserialize)]
pub struct Coupon {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub coupon_code: Option<String>,
    /// Validity in days from issue
    #[serde(default)]
    pub validity: Option<i64>,
    /// 0 = still hidden, 1 = revealed
    #[serde(default)]
    pub scratched: u8,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Coupon {
    pub fn is_scratched(&self) -> bool {
        self.scratched == 1
    }
}

/// Envelope for `clients/get-coupon`
#[derive(Debug, Clone, Deserialize)]
pub struct CouponResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub coupon: Vec<Coupon>,
}
