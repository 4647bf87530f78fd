//! Response models for the RepayKaro API
//!
//! Every envelope carries `success` and an optional `message`; endpoints add
//! their own payload fields. Decoding happens at the executor boundary, so a
//! body that does not match its endpoint's shape is rejected instead of being
//! read optimistically.

pub mod auth;
pub mod client;
pub mod coupon;
pub mod decimal;
pub mod screenshot;
pub mod timeline;

pub use auth::{LoginResponse, OtpResponse};
pub use client::{ClientRecord, ClientResponse, PaymentOption};
pub use coupon::{Coupon, CouponResponse};
pub use decimal::Decimal;
pub use screenshot::{Screenshot, ScreenshotResponse};
pub use timeline::{TimelineEntry, TimelineResponse};

use serde::Deserialize;

/// Minimal envelope for endpoints that return no payload beyond the outcome
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
