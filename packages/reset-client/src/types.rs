//! Password reset service request and response types.

use serde::{Deserialize, Serialize};

/// Body of `POST /send_verification`.
#[derive(Debug, Clone, Serialize)]
pub struct SendCodeRequest<'a> {
    pub email: &'a str,
}

/// Body of `POST /verify_code`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyCodeRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

/// Response shared by every endpoint.
///
/// The service omits fields freely (error responses carry no `status` or
/// `timestamp`, health responses may carry no `message`), so everything but
/// `success` is optional and `success` defaults to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ServiceResponse {
    /// `status == "success"` is the service's liveness signal.
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Resolved result of a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Split into the `(success, message)` pair handed to callbacks.
    pub fn into_parts(self) -> (bool, String) {
        (self.success, self.message)
    }
}
