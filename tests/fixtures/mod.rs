// Hand-written collaborators for integration tests - no network, no side effects

#![allow(dead_code)]

use async_trait::async_trait;
use carotid_screen::services::*;
use carotid_screen::session::{Collaborators, SessionSettings};
use chrono::Utc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

pub struct AcceptingAuth;

#[async_trait]
impl AuthService for AcceptingAuth {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, ServiceError> {
        Ok(SessionToken {
            token: "test-token".to_string(),
            principal: credentials.principal().to_string(),
            issued_at: Utc::now(),
        })
    }
}

pub struct InstantScans;

#[async_trait]
impl ScanProvider for InstantScans {
    async fn capture(&self, patient_id: &PatientId) -> Result<ScanCapture, ServiceError> {
        Ok(ScanCapture {
            frame_id: Uuid::new_v4(),
            patient_id: patient_id.clone(),
            captured_at: Utc::now(),
            frame_count: 12,
            image_quality_pct: 88,
        })
    }
}

/// Inference that takes `delay` and then reports `imt_mm`
pub struct SlowInference {
    pub delay: Duration,
    pub imt_mm: f64,
    pub risk: RiskLevel,
}

impl SlowInference {
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
            imt_mm: 1.28,
            risk: RiskLevel::Medium,
        }
    }
}

#[async_trait]
impl InferenceService for SlowInference {
    async fn analyze(&self, capture: &ScanCapture) -> Result<AnalysisResult, ServiceError> {
        tokio::time::sleep(self.delay).await;
        Ok(AnalysisResult {
            frame_id: capture.frame_id,
            imt_mm: self.imt_mm,
            risk: self.risk,
            mask_shape: (MASK_SIZE, MASK_SIZE),
            model_version: "fixture".to_string(),
        })
    }
}

/// Referral endpoint that records every request and fails the first
/// `failures_remaining` submissions
#[derive(Clone, Default)]
pub struct RecordingReferrals {
    pub requests: Arc<Mutex<Vec<ReferralRequest>>>,
    pub failures_remaining: Arc<Mutex<u32>>,
}

impl RecordingReferrals {
    pub fn failing(times: u32) -> Self {
        Self {
            requests: Arc::default(),
            failures_remaining: Arc::new(Mutex::new(times)),
        }
    }

    pub fn recorded(&self) -> Vec<ReferralRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReferralService for RecordingReferrals {
    async fn submit(&self, request: &ReferralRequest) -> Result<ReferralAck, ServiceError> {
        {
            let mut failures = self.failures_remaining.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(ServiceError::Referral {
                    reason: "hospital endpoint unreachable".to_string(),
                });
            }
        }

        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        Ok(ReferralAck {
            reference: format!("REF-{:04}", requests.len()),
            facility: "Fixture Hospital".to_string(),
            received_at: Utc::now(),
        })
    }
}

pub fn collaborators(inference: SlowInference, referrals: RecordingReferrals) -> Collaborators {
    Collaborators {
        auth: Arc::new(AcceptingAuth),
        scans: Arc::new(InstantScans),
        inference: Arc::new(inference),
        referrals: Arc::new(referrals),
    }
}

pub fn settings(analysis_timeout: Duration) -> SessionSettings {
    SessionSettings {
        default_patient: PatientId::new("PT-FIXTURE"),
        analysis_timeout,
    }
}

pub fn token() -> SessionToken {
    SessionToken {
        token: "test-token".to_string(),
        principal: "chw@example.org".to_string(),
        issued_at: Utc::now(),
    }
}

pub fn nairobi() -> GeoPoint {
    GeoPoint {
        lat: -1.2921,
        lon: 36.8219,
    }
}
