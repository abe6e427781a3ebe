use std::time::Duration;
use thiserror::Error;

/// Failures reported by the external collaborators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Authentication failed: {reason}")]
    Authentication { reason: String },
    #[error("Scan capture failed: {reason}")]
    Capture { reason: String },
    #[error("Inference failed: {reason}")]
    Inference { reason: String },
    #[error("Inference timed out after {timeout_ms}ms")]
    InferenceTimeout { timeout_ms: u64 },
    #[error("Referral submission failed: {reason}")]
    Referral { reason: String },
}

impl ServiceError {
    /// Timeout for an inference call bounded by `timeout`, saturating at `u64::MAX` ms
    pub fn inference_timeout(timeout: Duration) -> Self {
        ServiceError::InferenceTimeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Whether the user can reasonably retry the same action
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ServiceError::Authentication { .. })
    }
}
