//! Phone/OTP authentication flow

use serde_json::json;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::http::ApiClient;
use crate::models::{LoginResponse, OtpResponse};
use crate::validation::{validate_otp, validate_phone};

/// Authentication endpoints
#[derive(Clone)]
pub struct AuthApi {
    http: ApiClient,
}

impl AuthApi {
    /// Create a new auth service over the shared client
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }

    /// Ask the backend to send an OTP to `phone`; also used for resend
    pub async fn request_otp(&self, phone: &str) -> ApiResult<LoginResponse> {
        validate_phone(phone).map_err(ApiError::Validation)?;

        info!("Requesting OTP");
        self.http
            .post("clientAuth/login", &json!({ "phone": phone }))
            .await
    }

    /// Validate the OTP; on success the executor has already persisted the
    /// issued token, and any profile fields in the response are cached
    pub async fn validate_otp(&self, phone: &str, otp: &str) -> ApiResult<OtpResponse> {
        validate_phone(phone).map_err(ApiError::Validation)?;
        validate_otp(otp).map_err(ApiError::Validation)?;

        let response: OtpResponse = self
            .http
            .post(
                "clientAuth/validate-otp",
                &json!({ "phone": phone, "otp": otp }),
            )
            .await?;

        if response.success {
            info!("OTP validated, session established");
            self.http
                .session()
                .cache_profile(response.name.as_deref(), response.phone.as_deref())
                .await?;
        }

        Ok(response)
    }

    /// Drop the local session; the backend holds no logout endpoint
    pub async fn logout(&self) -> ApiResult<()> {
        self.http.session().clear().await?;
        Ok(())
    }
}
