// Data exchanged with the external collaborators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Login input; the login screen toggles between the two modes
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    EmailPassword { email: String, password: String },
    Phone { number: String },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::EmailPassword { email, .. } => f
                .debug_struct("EmailPassword")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::Phone { number } => {
                f.debug_struct("Phone").field("number", number).finish()
            }
        }
    }
}

impl Credentials {
    /// Identity used in logs; never includes the password
    pub fn principal(&self) -> &str {
        match self {
            Credentials::EmailPassword { email, .. } => email,
            Credentials::Phone { number } => number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    pub principal: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientId(pub String);

impl PatientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One captured ultrasound acquisition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanCapture {
    pub frame_id: Uuid,
    pub patient_id: PatientId,
    pub captured_at: DateTime<Utc>,
    pub frame_count: u32,
    pub image_quality_pct: u8,
}

/// Triage classification of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low risk",
            RiskLevel::Medium => "medium risk",
            RiskLevel::High => "high risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Segmentation outcome for a capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub frame_id: Uuid,
    /// Intima-media thickness in millimeters
    pub imt_mm: f64,
    pub risk: RiskLevel,
    /// Height and width of the predicted mask
    pub mask_shape: (u32, u32),
    pub model_version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Referral record sent to the hospital system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralRequest {
    pub patient_id: PatientId,
    pub imt_mm: f64,
    pub risk: RiskLevel,
    pub location: GeoPoint,
    pub submitted_at: DateTime<Utc>,
}

impl ReferralRequest {
    pub fn from_analysis(
        patient_id: PatientId,
        analysis: &AnalysisResult,
        location: GeoPoint,
    ) -> Self {
        Self {
            patient_id,
            imt_mm: analysis.imt_mm,
            risk: analysis.risk,
            location,
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralAck {
    pub reference: String,
    pub facility: String,
    pub received_at: DateTime<Utc>,
}
