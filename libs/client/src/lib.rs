//! RepayKaro client SDK
//!
//! Typed access to the RepayKaro loan-repayment rewards API: phone/OTP
//! authentication, outstanding-balance reads, payment screenshot management,
//! and scratch-card coupons. Every request goes through a single
//! authenticated executor that injects the bearer token, adopts rotated
//! tokens, and turns backend session-invalidation signals into a forced
//! return to the login screen.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod notify;
pub mod reveal;
pub mod session;
pub mod validation;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use http::ApiClient;
pub use notify::{ExpiryNotifier, LoginRedirect};
pub use session::SessionStore;
