//! Password reset service client.
//!
//! Talks to the password reset service: asks it to email a verification code,
//! checks a code the user typed in, and probes service health. Every operation
//! issues exactly one HTTP request and resolves to a `(success, message)` pair;
//! failures never escape as errors and never poison the client.
//!
//! # Example
//!
//! ```rust,ignore
//! use reset_client::ResetClient;
//!
//! let client = ResetClient::from_env()?;
//!
//! let outcome = client.send_verification_code("player@example.com").await;
//! if outcome.success {
//!     println!("Check your inbox: {}", outcome.message);
//! }
//!
//! // Callback style, for callers driven by an event loop
//! client.spawn_verify_reset_code(
//!     "player@example.com",
//!     "123456",
//!     Some(Box::new(|ok, message| println!("{ok}: {message}"))),
//! );
//! ```

pub mod config;
pub mod error;
pub mod types;

pub use config::{ResetClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ResetError, Result};
pub use types::{Outcome, SendCodeRequest, ServiceResponse, VerifyCodeRequest};

use reqwest::{header, Client, Response};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const SEND_VERIFICATION_PATH: &str = "/send_verification";
const VERIFY_CODE_PATH: &str = "/verify_code";
const HEALTH_PATH: &str = "/health";

/// Message reported by a healthy service that sent none of its own.
const HEALTHY_FALLBACK: &str = "Service is healthy";

/// Completion callback receiving `(success, message)`.
pub type ResultCallback = Box<dyn FnOnce(bool, String) + Send + 'static>;

/// Password reset service client.
///
/// Cheap to clone; clones share one connection pool. Build it once at startup
/// and hand it to whoever needs it.
#[derive(Debug, Clone)]
pub struct ResetClient {
    http_client: Client,
    base_url: String,
}

impl ResetClient {
    /// Create a client for the configured service.
    pub fn new(config: ResetClientConfig) -> Result<Self> {
        let base_url = config.validate()?;
        Ok(Self {
            http_client: Client::new(),
            base_url,
        })
    }

    /// Create from environment variable `PASSWORD_RESET_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(ResetClientConfig::from_env())
    }

    pub fn with_base_url(url: impl Into<String>) -> Result<Self> {
        Self::new(ResetClientConfig::new(url))
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Typed requests
    // =========================================================================

    /// `POST /send_verification`.
    pub async fn request_verification_code(&self, email: &str) -> Result<ServiceResponse> {
        self.post_json(SEND_VERIFICATION_PATH, &SendCodeRequest { email })
            .await
    }

    /// `POST /verify_code`.
    pub async fn request_code_verification(
        &self,
        email: &str,
        code: &str,
    ) -> Result<ServiceResponse> {
        self.post_json(VERIFY_CODE_PATH, &VerifyCodeRequest { email, code })
            .await
    }

    /// `GET /health`.
    pub async fn request_health(&self) -> Result<ServiceResponse> {
        let url = self.endpoint(HEALTH_PATH);
        debug!(url = %url, "Checking reset service health");

        let response = self.http_client.get(&url).send().await?;
        Self::decode(response).await
    }

    // =========================================================================
    // Outcomes
    // =========================================================================

    /// Ask the service to email a verification code.
    pub async fn send_verification_code(&self, email: &str) -> Outcome {
        match self.request_verification_code(email).await {
            Ok(response) => Self::relay(response),
            Err(e) => {
                warn!(error = %e, "Error sending verification email");
                Outcome::failure(format!("Network error: {}", e))
            }
        }
    }

    /// Check a code the user received by email.
    pub async fn verify_reset_code(&self, email: &str, code: &str) -> Outcome {
        match self.request_code_verification(email, code).await {
            Ok(response) => Self::relay(response),
            Err(e) => {
                warn!(error = %e, "Error verifying code");
                Outcome::failure(format!("Network error: {}", e))
            }
        }
    }

    /// Probe service liveness. Healthy only when the service reports `status: "success"`.
    pub async fn check_health(&self) -> Outcome {
        match self.request_health().await {
            Ok(response) => {
                let healthy = response.is_healthy();
                Outcome {
                    success: healthy,
                    message: response
                        .message
                        .unwrap_or_else(|| HEALTHY_FALLBACK.to_string()),
                }
            }
            Err(e) => {
                warn!(error = %e, "Health check failed");
                Outcome::failure(format!("Health check failed: {}", e))
            }
        }
    }

    // =========================================================================
    // Callback style
    // =========================================================================

    /// Run [`send_verification_code`](Self::send_verification_code) in the
    /// background and hand the result to `on_done`.
    pub fn spawn_send_verification_code(
        &self,
        email: impl Into<String>,
        on_done: Option<ResultCallback>,
    ) -> JoinHandle<()> {
        let client = self.clone();
        let email = email.into();
        tokio::spawn(async move {
            let outcome = client.send_verification_code(&email).await;
            deliver(on_done, outcome);
        })
    }

    /// Run [`verify_reset_code`](Self::verify_reset_code) in the background
    /// and hand the result to `on_done`.
    pub fn spawn_verify_reset_code(
        &self,
        email: impl Into<String>,
        code: impl Into<String>,
        on_done: Option<ResultCallback>,
    ) -> JoinHandle<()> {
        let client = self.clone();
        let email = email.into();
        let code = code.into();
        tokio::spawn(async move {
            let outcome = client.verify_reset_code(&email, &code).await;
            deliver(on_done, outcome);
        })
    }

    /// Run [`check_health`](Self::check_health) in the background and hand
    /// the result to `on_done`.
    pub fn spawn_check_health(&self, on_done: Option<ResultCallback>) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move {
            let outcome = client.check_health().await;
            deliver(on_done, outcome);
        })
    }

    // =========================================================================
    // Transport
    // =========================================================================

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<ServiceResponse> {
        let url = self.endpoint(path);
        debug!(url = %url, "Sending reset service request");

        let response = self
            .http_client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode(response: Response) -> Result<ServiceResponse> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Reset service returned an error");
            return Err(ResetError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let parsed: ServiceResponse = serde_json::from_str(&text)?;

        debug!(
            success = parsed.success,
            timestamp = parsed.timestamp.as_deref().unwrap_or("-"),
            "Reset service responded"
        );

        Ok(parsed)
    }

    fn relay(response: ServiceResponse) -> Outcome {
        Outcome {
            success: response.success,
            message: response.message.unwrap_or_default(),
        }
    }
}

fn deliver(on_done: Option<ResultCallback>, outcome: Outcome) {
    match on_done {
        Some(callback) => {
            let (success, message) = outcome.into_parts();
            callback(success, message);
        }
        None => debug!(success = outcome.success, "No callback registered, dropping result"),
    }
}
