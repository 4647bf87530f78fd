//! Authenticated request executor
//!
//! Single choke point for every call to the RepayKaro backend. Each request
//! reads the session store for the bearer token, and each response is
//! inspected twice before the typed payload is decoded: once for the
//! session-invalidation signals (HTTP 401, or a `message` naming
//! "unauthorized" or "jwt token"), and once for a rotated `jwtToken` the
//! client must adopt going forward. An invalidated session is cleared,
//! reported through the expiry notifier, and surfaced as
//! [`ApiError::SessionExpired`] so callers never mistake it for a generic
//! network failure. A `success: false` body with no expiry signal is a
//! business result, not an error; it is decoded and passed through.

use reqwest::{RequestBuilder, StatusCode, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::notify::ExpiryNotifier;
use crate::session::SessionStore;

/// Authenticated HTTP client for the RepayKaro API
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    notifier: ExpiryNotifier,
}

impl ApiClient {
    /// Build a client from config, session storage, and the expiry notifier
    pub fn new(
        config: &ApiConfig,
        session: SessionStore,
        notifier: ExpiryNotifier,
    ) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.clone(),
            session,
            notifier,
        })
    }

    /// The session store this client reads and maintains
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Issue a GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.dispatch(self.http.get(self.url(endpoint)), "GET", endpoint)
            .await
    }

    /// Issue a POST request with a JSON body
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(self.http.post(self.url(endpoint)).json(body), "POST", endpoint)
            .await
    }

    /// Issue a POST request with a multipart body; the transport sets the
    /// content type and boundary
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: multipart::Form,
    ) -> ApiResult<T> {
        self.dispatch(
            self.http.post(self.url(endpoint)).multipart(form),
            "POST",
            endpoint,
        )
        .await
    }

    /// Issue a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.dispatch(self.http.delete(self.url(endpoint)), "DELETE", endpoint)
            .await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        endpoint: &str,
    ) -> ApiResult<T> {
        debug!("{} {}", method, endpoint);

        // An absent token is a valid logged-out state; the server decides
        // whether the endpoint requires auth
        let request = match self.session.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).map_err(|e| {
            error!("Malformed response body from {} {}: {}", method, endpoint, e);
            ApiError::Decode(e)
        })?;

        if expiry_signal(status, &body) {
            warn!("Session invalidated by {} {}", method, endpoint);
            if let Err(e) = self.session.clear().await {
                error!("Failed to clear expired session: {}", e);
            }
            self.notifier.notify();
            return Err(ApiError::SessionExpired);
        }

        if let Some(token) = rotated_token(&body) {
            info!("Adopting rotated session token");
            self.session.set_token(token).await?;
        }

        serde_json::from_value(body).map_err(ApiError::Decode)
    }
}

/// Session-expiry detection, first match wins: transport 401, then the
/// case-insensitive "unauthorized" and "jwt token" message substrings. The
/// backend exposes no structured error code, so the message heuristic is the
/// observable contract.
fn expiry_signal(status: StatusCode, body: &Value) -> bool {
    if status == StatusCode::UNAUTHORIZED {
        return true;
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .unwrap_or_default();

    message.contains("unauthorized") || message.contains("jwt token")
}

/// A non-empty `jwtToken` field, on any endpoint's response
fn rotated_token(body: &Value) -> Option<&str> {
    body.get("jwtToken")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expiry_signal_on_401_regardless_of_body() {
        let body = json!({ "success": true, "message": "all good" });
        assert!(expiry_signal(StatusCode::UNAUTHORIZED, &body));
    }

    #[test]
    fn test_expiry_signal_on_message_substrings() {
        for message in ["Unauthorized access", "JWT Token expired", "jwt token missing"] {
            let body = json!({ "success": false, "message": message });
            assert!(expiry_signal(StatusCode::OK, &body), "{message}");
        }
    }

    #[test]
    fn test_business_failure_is_not_an_expiry() {
        let body = json!({ "success": false, "message": "Coupon already scratched" });
        assert!(!expiry_signal(StatusCode::OK, &body));

        let body = json!({ "success": false });
        assert!(!expiry_signal(StatusCode::BAD_REQUEST, &body));
    }

    #[test]
    fn test_rotated_token_ignores_empty_and_missing() {
        assert_eq!(rotated_token(&json!({ "jwtToken": "abc" })), Some("abc"));
        assert_eq!(rotated_token(&json!({ "jwtToken": "" })), None);
        assert_eq!(rotated_token(&json!({ "success": true })), None);
        assert_eq!(rotated_token(&json!({ "jwtToken": 42 })), None);
    }
}
