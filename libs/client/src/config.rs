//! Configuration for the API client

use anyhow::Result;

/// Default production backend
pub const DEFAULT_BASE_URL: &str = "https://api.repaykaro.com/api/v1/";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to; always ends with `/`
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl ApiConfig {
    /// Create a new ApiConfig from environment variables
    ///
    /// # Environment Variables
    /// - `REPAYKARO_API_BASE_URL`: backend base URL (default: the production API)
    /// - `REPAYKARO_HTTP_TIMEOUT_SECONDS`: per-request timeout (default: 30)
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("REPAYKARO_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout_seconds = std::env::var("REPAYKARO_HTTP_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(ApiConfig {
            base_url: normalize_base_url(base_url),
            timeout_seconds,
        })
    }

    /// Create a config pointing at an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: normalize_base_url(base_url.into()),
            timeout_seconds: 30,
        }
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_new_appends_trailing_slash() {
        let config = ApiConfig::new("http://127.0.0.1:9000/api/v1");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api/v1/");

        let config = ApiConfig::new("http://127.0.0.1:9000/api/v1/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api/v1/");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        unsafe {
            std::env::remove_var("REPAYKARO_API_BASE_URL");
            std::env::remove_var("REPAYKARO_HTTP_TIMEOUT_SECONDS");
        }

        let config = ApiConfig::from_env().expect("config");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        unsafe {
            std::env::set_var("REPAYKARO_API_BASE_URL", "http://localhost:4000/api/v1");
            std::env::set_var("REPAYKARO_HTTP_TIMEOUT_SECONDS", "5");
        }

        let config = ApiConfig::from_env().expect("config");
        assert_eq!(config.base_url, "http://localhost:4000/api/v1/");
        assert_eq!(config.timeout_seconds, 5);

        unsafe {
            std::env::remove_var("REPAYKARO_API_BASE_URL");
            std::env::remove_var("REPAYKARO_HTTP_TIMEOUT_SECONDS");
        }
    }
}
