// Demo collaborators - canned values and simulated latency standing in for
// the real auth, capture, inference and referral integrations

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use super::errors::ServiceError;
use super::traits::*;
use super::types::*;
use crate::config::{DemoDataConfig, SimulationConfig};

/// Side length of the square mask produced by the segmentation model
pub const MASK_SIZE: u32 = 128;

/// Accepts any non-empty credentials
#[derive(Debug, Default, Clone)]
pub struct DemoAuthService;

#[async_trait]
impl AuthService for DemoAuthService {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, ServiceError> {
        let missing = match credentials {
            Credentials::EmailPassword { email, password } => {
                email.trim().is_empty() || password.is_empty()
            }
            Credentials::Phone { number } => number.trim().is_empty(),
        };
        if missing {
            return Err(ServiceError::Authentication {
                reason: "credentials must not be empty".to_string(),
            });
        }

        info!(principal = %credentials.principal(), "Demo login accepted");
        Ok(SessionToken {
            token: Uuid::new_v4().to_string(),
            principal: credentials.principal().to_string(),
            issued_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DemoScanProvider {
    delay: Duration,
    frame_count: u32,
    image_quality_pct: u8,
}

impl DemoScanProvider {
    pub fn new(simulation: &SimulationConfig, demo: &DemoDataConfig) -> Self {
        Self {
            delay: simulation.scan_delay(),
            frame_count: demo.frame_count,
            image_quality_pct: demo.image_quality_pct,
        }
    }
}

#[async_trait]
impl ScanProvider for DemoScanProvider {
    async fn capture(&self, patient_id: &PatientId) -> Result<ScanCapture, ServiceError> {
        debug!(patient_id = %patient_id, delay = ?self.delay, "Simulating scan capture");
        tokio::time::sleep(self.delay).await;

        Ok(ScanCapture {
            frame_id: Uuid::new_v4(),
            patient_id: patient_id.clone(),
            captured_at: Utc::now(),
            frame_count: self.frame_count,
            image_quality_pct: self.image_quality_pct,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DemoInferenceService {
    delay: Duration,
    imt_mm: f64,
    risk: RiskLevel,
    model_version: String,
}

impl DemoInferenceService {
    pub fn new(simulation: &SimulationConfig, demo: &DemoDataConfig) -> Self {
        Self {
            delay: simulation.analysis_delay(),
            imt_mm: demo.imt_mm,
            risk: demo.risk,
            model_version: demo.model_version.clone(),
        }
    }
}

#[async_trait]
impl InferenceService for DemoInferenceService {
    async fn analyze(&self, capture: &ScanCapture) -> Result<AnalysisResult, ServiceError> {
        debug!(frame_id = %capture.frame_id, delay = ?self.delay, "Simulating inference");
        tokio::time::sleep(self.delay).await;

        Ok(AnalysisResult {
            frame_id: capture.frame_id,
            imt_mm: self.imt_mm,
            risk: self.risk,
            mask_shape: (MASK_SIZE, MASK_SIZE),
            model_version: self.model_version.clone(),
        })
    }
}

/// Always acknowledges with a fresh reference
#[derive(Debug, Clone)]
pub struct DemoReferralService {
    facility: String,
}

impl DemoReferralService {
    pub fn new(demo: &DemoDataConfig) -> Self {
        Self {
            facility: demo.facility.clone(),
        }
    }
}

#[async_trait]
impl ReferralService for DemoReferralService {
    async fn submit(&self, request: &ReferralRequest) -> Result<ReferralAck, ServiceError> {
        let reference = format!(
            "REF-{}",
            Uuid::new_v4().simple().to_string()[..8].to_uppercase()
        );
        info!(
            patient_id = %request.patient_id,
            risk = %request.risk,
            reference = %reference,
            "Demo referral acknowledged"
        );

        Ok(ReferralAck {
            reference,
            facility: self.facility.clone(),
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarotidScreenConfig;

    #[tokio::test]
    async fn test_demo_auth_rejects_only_empty_credentials() {
        let auth = DemoAuthService;

        let token = auth
            .authenticate(&Credentials::Phone {
                number: "+254700000001".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(token.principal, "+254700000001");

        let err = auth
            .authenticate(&Credentials::EmailPassword {
                email: "chw@clinic.org".to_string(),
                password: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Authentication { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_inference_returns_configured_measurement() {
        let config = CarotidScreenConfig::default();
        let scans = DemoScanProvider::new(&config.simulation, &config.demo);
        let inference = DemoInferenceService::new(&config.simulation, &config.demo);

        let started = tokio::time::Instant::now();
        let capture = scans.capture(&PatientId::new("PT-7")).await.unwrap();
        let result = inference.analyze(&capture).await.unwrap();

        assert_eq!(result.frame_id, capture.frame_id);
        assert_eq!(result.imt_mm, 1.28);
        assert_eq!(result.risk, RiskLevel::Medium);
        assert_eq!(result.mask_shape, (MASK_SIZE, MASK_SIZE));
        assert!(
            started.elapsed()
                >= config.simulation.scan_delay() + config.simulation.analysis_delay()
        );
    }

    #[tokio::test]
    async fn test_demo_referral_reference_format() {
        let config = CarotidScreenConfig::default();
        let referrals = DemoReferralService::new(&config.demo);
        let request = ReferralRequest {
            patient_id: PatientId::new("PT-7"),
            imt_mm: 1.28,
            risk: RiskLevel::Medium,
            location: GeoPoint { lat: 0.0, lon: 0.0 },
            submitted_at: Utc::now(),
        };

        let ack = referrals.submit(&request).await.unwrap();
        assert!(ack.reference.starts_with("REF-"));
        assert_eq!(ack.reference.len(), 12);
        assert_eq!(ack.facility, config.demo.facility);
    }
}
