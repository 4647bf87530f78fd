//! Typed endpoint wrappers over the authenticated executor
//!
//! One service per backend domain, each a thin clone-able handle around the
//! shared [`ApiClient`](crate::http::ApiClient).

pub mod auth;
pub mod clients;
pub mod coupons;

pub use auth::AuthApi;
pub use clients::ClientApi;
pub use coupons::{CouponApi, RevealOutcome};
