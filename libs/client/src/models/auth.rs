//! Authentication responses

use serde::Deserialize;

/// Response to an OTP request (`clientAuth/login`)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to OTP validation (`clientAuth/validate-otp`)
///
/// The executor persists `jwtToken` before this struct reaches the caller;
/// the field is kept so callers can tell a real login from a retryable
/// failure.
#[derive(Debug, Clone, Deserialize)]
pub struct OtpResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "jwtToken")]
    pub jwt_token: Option<String>,
    /// Customer display name, when the backend includes it on login
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}
