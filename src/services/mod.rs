// External collaborators - authentication, capture, inference and referral -
// consumed as black boxes behind async traits

pub mod demo;
pub mod errors;
pub mod traits;
pub mod types;

pub use demo::{
    DemoAuthService, DemoInferenceService, DemoReferralService, DemoScanProvider, MASK_SIZE,
};
pub use errors::ServiceError;
pub use traits::{AuthService, InferenceService, ReferralService, ScanProvider};
pub use types::{
    AnalysisResult, Credentials, GeoPoint, PatientId, ReferralAck, ReferralRequest, RiskLevel,
    ScanCapture, SessionToken,
};

#[cfg(test)]
pub use traits::{MockAuthService, MockInferenceService, MockReferralService, MockScanProvider};
