// Carotid Screen Library - Screening Workflow Core
// Exposes the workflow navigator, routing surface and collaborator interfaces

pub mod cli;
pub mod config;
pub mod routing;
pub mod services;
pub mod session;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use crate::config::{config, init_config, CarotidScreenConfig};
pub use routing::{Route, RouteStack};
pub use services::{
    AnalysisResult, AuthService, Credentials, GeoPoint, InferenceService, PatientId,
    ReferralAck, ReferralRequest, ReferralService, RiskLevel, ScanCapture, ScanProvider,
    ServiceError, SessionToken,
};
pub use session::{AppShell, Collaborators, ScreeningError, ScreeningSession, SplashGate};
pub use telemetry::{create_screening_span, generate_correlation_id, init_telemetry, shutdown_telemetry};
pub use workflow::{
    render_indicator, IndicatorRow, NavigationOutcome, SegmentState, WorkflowNavigator,
    WorkflowStage,
};
