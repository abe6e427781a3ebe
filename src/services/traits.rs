// Traits for dependency injection - every simulated value sits behind one of
// these so screens can be driven without a real backend

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::errors::ServiceError;
use super::types::*;

/// Authentication service: credentials in, session token out
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, ServiceError>;
}

/// Ultrasound frame source
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScanProvider: Send + Sync {
    async fn capture(&self, patient_id: &PatientId) -> Result<ScanCapture, ServiceError>;
}

/// Segmentation model: capture in, IMT measurement and risk out
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferenceService: Send + Sync {
    async fn analyze(&self, capture: &ScanCapture) -> Result<AnalysisResult, ServiceError>;
}

/// Hospital referral endpoint
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReferralService: Send + Sync {
    async fn submit(&self, request: &ReferralRequest) -> Result<ReferralAck, ServiceError>;
}
