//! Scratch-card coupon endpoints

use serde_json::json;
use tracing::info;

use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::{AckResponse, Coupon, CouponResponse};
use crate::reveal::RevealGuard;

/// Outcome of a reveal attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RevealOutcome {
    /// The card was scratched; trigger the celebration once with this amount
    Revealed { amount: f64 },
    /// Business failure; the card stays hidden and the user may retry
    Failed { message: Option<String> },
    /// A reveal for this coupon is already outstanding; discarded before I/O
    AlreadyInFlight,
}

/// Coupon endpoints, with the at-most-once-reveal guard built in
#[derive(Clone)]
pub struct CouponApi {
    http: ApiClient,
    guard: RevealGuard,
}

impl CouponApi {
    /// Create a new coupon service over the shared client
    pub fn new(http: ApiClient) -> Self {
        Self {
            http,
            guard: RevealGuard::new(),
        }
    }

    /// List the customer's coupons
    pub async fn get_coupons(&self) -> ApiResult<CouponResponse> {
        self.http.get("clients/get-coupon").await
    }

    /// Scratch a coupon; duplicate attempts while the request is outstanding
    /// are discarded before any network I/O
    pub async fn reveal(&self, coupon: &Coupon) -> ApiResult<RevealOutcome> {
        let Some(_in_flight) = self.guard.try_begin(&coupon.id) else {
            return Ok(RevealOutcome::AlreadyInFlight);
        };

        let response: AckResponse = self
            .http
            .post("coupons/coupon-scratch", &json!({ "coupon_id": coupon.id }))
            .await?;

        if response.success {
            info!("Coupon {} revealed", coupon.id);
            Ok(RevealOutcome::Revealed {
                amount: coupon.amount.value(),
            })
        } else {
            Ok(RevealOutcome::Failed {
                message: response.message,
            })
        }
    }
}
