use std::env;

use dotenvy::dotenv;
use url::Url;

use crate::error::{ResetError, Result};

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable holding the service base URL.
pub const BASE_URL_ENV: &str = "PASSWORD_RESET_API_URL";

/// Reset client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetClientConfig {
    pub base_url: String,
}

impl Default for ResetClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ResetClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenv();

        Self {
            base_url: env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Check the base URL and return it without a trailing slash.
    pub fn validate(&self) -> Result<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| ResetError::Config(format!("invalid base URL {:?}: {}", self.base_url, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(trimmed.to_string()),
            other => Err(ResetError::Config(format!(
                "unsupported base URL scheme {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(ResetClientConfig::default().base_url, "http://localhost:5000");
    }

    #[test]
    fn from_env_reads_base_url() {
        temp_env::with_var(BASE_URL_ENV, Some("https://reset.example.com"), || {
            assert_eq!(ResetClientConfig::from_env().base_url, "https://reset.example.com");
        });
    }

    #[test]
    fn from_env_falls_back_to_default() {
        temp_env::with_var_unset(BASE_URL_ENV, || {
            assert_eq!(ResetClientConfig::from_env(), ResetClientConfig::default());
        });
    }

    #[test]
    fn validate_strips_trailing_slash() {
        let config = ResetClientConfig::new("https://reset.example.com/api/");
        assert_eq!(config.validate().unwrap(), "https://reset.example.com/api");
    }

    #[test]
    fn validate_rejects_garbage() {
        let err = ResetClientConfig::new("not a url").validate().unwrap_err();
        assert!(matches!(err, ResetError::Config(_)));
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let err = ResetClientConfig::new("ftp://example.com").validate().unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }
}
