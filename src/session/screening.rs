// One authenticated screening session: the screens' explicit "continue"
// actions, each of which advances the navigator by exactly one stage

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn, Instrument};

use crate::config::CarotidScreenConfig;
use crate::services::*;
use crate::telemetry::{create_screening_span, generate_correlation_id};
use crate::workflow::{NavigationOutcome, WorkflowNavigator, WorkflowStage};

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("'{action}' is only available on the {expected} screen (current: {current})")]
    OutOfStage {
        action: &'static str,
        expected: WorkflowStage,
        current: WorkflowStage,
    },
    #[error("No scan has been captured for this screening")]
    MissingCapture,
    #[error("No analysis result is available for this screening")]
    MissingAnalysis,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ScreeningError {
    /// Whether repeating the same action on the same screen can succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ScreeningError::Service(err) => err.is_retryable(),
            _ => false,
        }
    }
}

/// Handles to every external collaborator
#[derive(Clone)]
pub struct Collaborators {
    pub auth: Arc<dyn AuthService>,
    pub scans: Arc<dyn ScanProvider>,
    pub inference: Arc<dyn InferenceService>,
    pub referrals: Arc<dyn ReferralService>,
}

impl Collaborators {
    /// The prototype's stubbed collaborators
    pub fn demo(config: &CarotidScreenConfig) -> Self {
        Self {
            auth: Arc::new(DemoAuthService),
            scans: Arc::new(DemoScanProvider::new(&config.simulation, &config.demo)),
            inference: Arc::new(DemoInferenceService::new(&config.simulation, &config.demo)),
            referrals: Arc::new(DemoReferralService::new(&config.demo)),
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub default_patient: PatientId,
    pub analysis_timeout: Duration,
}

impl SessionSettings {
    pub fn from_config(config: &CarotidScreenConfig) -> Self {
        Self {
            default_patient: PatientId::new(config.demo.patient_id.clone()),
            analysis_timeout: config.simulation.analysis_timeout(),
        }
    }
}

pub struct ScreeningSession {
    token: SessionToken,
    collaborators: Collaborators,
    settings: SessionSettings,
    navigator: WorkflowNavigator,
    correlation_id: String,
    patient_id: PatientId,
    capture: Option<ScanCapture>,
    analysis: Option<AnalysisResult>,
    completed_referrals: Vec<ReferralAck>,
}

impl std::fmt::Debug for ScreeningSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreeningSession")
            .field("principal", &self.token.principal)
            .field("correlation_id", &self.correlation_id)
            .field("patient_id", &self.patient_id)
            .field("navigator", &self.navigator)
            .field("has_capture", &self.capture.is_some())
            .field("has_analysis", &self.analysis.is_some())
            .finish()
    }
}

impl ScreeningSession {
    pub fn new(token: SessionToken, collaborators: Collaborators, settings: SessionSettings) -> Self {
        let correlation_id = generate_correlation_id();
        info!(
            principal = %token.principal,
            correlation_id = %correlation_id,
            "Screening session opened"
        );

        Self {
            navigator: WorkflowNavigator::with_correlation_id(correlation_id.clone()),
            patient_id: settings.default_patient.clone(),
            token,
            collaborators,
            settings,
            correlation_id,
            capture: None,
            analysis: None,
            completed_referrals: Vec::new(),
        }
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn navigator(&self) -> &WorkflowNavigator {
        &self.navigator
    }

    pub fn current_stage(&self) -> WorkflowStage {
        self.navigator.current_stage()
    }

    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    pub fn capture(&self) -> Option<&ScanCapture> {
        self.capture.as_ref()
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Acknowledgements of every referral submitted in this session
    pub fn completed_referrals(&self) -> &[ReferralAck] {
        &self.completed_referrals
    }

    /// Indicator tap; forward taps are silently ignored
    pub fn tap_indicator(&mut self, target: WorkflowStage) -> NavigationOutcome {
        self.navigator.request_navigate(target)
    }

    fn ensure_stage(&self, action: &'static str, expected: WorkflowStage) -> Result<(), ScreeningError> {
        let current = self.current_stage();
        if current != expected {
            return Err(ScreeningError::OutOfStage {
                action,
                expected,
                current,
            });
        }
        Ok(())
    }

    fn span(&self, operation: &str) -> tracing::Span {
        create_screening_span(
            operation,
            Some(self.patient_id.as_str()),
            self.current_stage(),
            Some(&self.correlation_id),
        )
    }

    /// Dashboard: begin a screening for the configured demo patient
    pub fn start_screening(&mut self) -> Result<NavigationOutcome, ScreeningError> {
        let patient_id = self.settings.default_patient.clone();
        self.start_screening_for(patient_id)
    }

    /// Dashboard: begin a screening for `patient_id`
    pub fn start_screening_for(
        &mut self,
        patient_id: PatientId,
    ) -> Result<NavigationOutcome, ScreeningError> {
        self.ensure_stage("start screening", WorkflowStage::Dashboard)?;

        info!(patient_id = %patient_id, correlation_id = %self.correlation_id, "Screening started");
        self.patient_id = patient_id;
        self.capture = None;
        self.analysis = None;
        Ok(self.navigator.complete_stage())
    }

    /// Scan: capture a frame and move on to analysis
    pub async fn capture_scan(&mut self) -> Result<ScanCapture, ScreeningError> {
        self.ensure_stage("capture scan", WorkflowStage::Scan)?;

        let span = self.span("capture_scan");
        let capture = self
            .collaborators
            .scans
            .capture(&self.patient_id)
            .instrument(span)
            .await?;

        info!(
            frame_id = %capture.frame_id,
            frames = capture.frame_count,
            quality_pct = capture.image_quality_pct,
            "Scan captured"
        );
        self.capture = Some(capture.clone());
        self.analysis = None;
        self.navigator.complete_stage();
        Ok(capture)
    }

    /// Analysis: run inference on the capture, bounded by the analysis timeout
    pub async fn run_analysis(&mut self) -> Result<AnalysisResult, ScreeningError> {
        self.ensure_stage("run analysis", WorkflowStage::Analysis)?;
        let capture = self.capture.as_ref().ok_or(ScreeningError::MissingCapture)?;

        let span = self.span("run_analysis");
        let timeout = self.settings.analysis_timeout;
        let analysis = tokio::time::timeout(timeout, self.collaborators.inference.analyze(capture))
            .instrument(span)
            .await;

        let analysis = match analysis {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    frame_id = %capture.frame_id,
                    timeout = ?timeout,
                    "Inference timed out"
                );
                return Err(ServiceError::inference_timeout(timeout).into());
            }
        };

        info!(
            imt_mm = analysis.imt_mm,
            risk = %analysis.risk,
            model_version = %analysis.model_version,
            "Analysis complete"
        );
        self.analysis = Some(analysis.clone());
        self.navigator.complete_stage();
        Ok(analysis)
    }

    /// Results: the worker confirms the triage result and proceeds to referral
    pub fn confirm_results(&mut self) -> Result<NavigationOutcome, ScreeningError> {
        self.ensure_stage("confirm results", WorkflowStage::Results)?;
        if self.analysis.is_none() {
            return Err(ScreeningError::MissingAnalysis);
        }
        Ok(self.navigator.complete_stage())
    }

    /// Referral: submit the referral, close the screening and return to a
    /// clean Dashboard
    pub async fn submit_referral(&mut self, location: GeoPoint) -> Result<ReferralAck, ScreeningError> {
        self.ensure_stage("submit referral", WorkflowStage::Referral)?;
        let analysis = self.analysis.as_ref().ok_or(ScreeningError::MissingAnalysis)?;

        let request = ReferralRequest::from_analysis(self.patient_id.clone(), analysis, location);
        let span = self.span("submit_referral");
        let ack = self
            .collaborators
            .referrals
            .submit(&request)
            .instrument(span)
            .await?;

        info!(
            reference = %ack.reference,
            facility = %ack.facility,
            patient_id = %request.patient_id,
            "Referral submitted"
        );
        self.capture = None;
        self.analysis = None;
        self.patient_id = self.settings.default_patient.clone();
        self.completed_referrals.push(ack.clone());
        self.navigator.complete_stage();
        Ok(ack)
    }
}
