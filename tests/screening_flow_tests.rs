//! End-to-end screening flow tests
//!
//! Drive a whole session through the app shell with fixture collaborators:
//! splash, login, the four "continue" actions, referral and logout.

use carotid_screen::config::CarotidScreenConfig;
use carotid_screen::routing::Route;
use carotid_screen::services::{Credentials, RiskLevel, ServiceError};
use carotid_screen::session::{AppShell, ScreeningError, ScreeningSession, ShellPhase};
use carotid_screen::workflow::WorkflowStage;
use std::time::Duration;

mod fixtures;

use fixtures::*;

fn email() -> Credentials {
    Credentials::EmailPassword {
        email: "chw@example.org".to_string(),
        password: "demo".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn test_shell_runs_complete_screening() {
    let referrals = RecordingReferrals::default();
    let mut config = CarotidScreenConfig::default();
    config.app.splash_delay_ms = 1500;

    let mut shell = AppShell::new(
        &config,
        collaborators(SlowInference::instant(), referrals.clone()),
    );
    assert_eq!(shell.finish_splash().await, Route::Login);

    let session = shell.login(&email()).await.unwrap();
    session.start_screening().unwrap();
    session.capture_scan().await.unwrap();
    let analysis = session.run_analysis().await.unwrap();
    assert_eq!(analysis.imt_mm, 1.28);
    assert_eq!(analysis.risk, RiskLevel::Medium);
    session.confirm_results().unwrap();
    let ack = session.submit_referral(nairobi()).await.unwrap();

    assert_eq!(ack.reference, "REF-0001");
    assert_eq!(shell.current_route(), Route::Dashboard);

    let recorded = referrals.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].patient_id.as_str(), config.demo.patient_id);
    assert_eq!(recorded[0].imt_mm, 1.28);
    assert_eq!(recorded[0].location, nairobi());

    assert!(shell.logout());
    assert_eq!(shell.phase(), ShellPhase::Login);
}

#[tokio::test(start_paused = true)]
async fn test_slow_inference_times_out_and_can_be_retried() {
    let inference = SlowInference {
        delay: Duration::from_secs(30),
        imt_mm: 0.9,
        risk: RiskLevel::Low,
    };
    let mut session = ScreeningSession::new(
        token(),
        collaborators(inference, RecordingReferrals::default()),
        settings(Duration::from_secs(10)),
    );
    session.start_screening().unwrap();
    session.capture_scan().await.unwrap();

    let err = session.run_analysis().await.unwrap_err();
    assert!(matches!(
        err,
        ScreeningError::Service(ServiceError::InferenceTimeout { timeout_ms: 10_000 })
    ));
    assert!(err.is_retryable());
    assert_eq!(session.current_stage(), WorkflowStage::Analysis);
    assert!(session.capture().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_inference_within_timeout_succeeds() {
    let inference = SlowInference {
        delay: Duration::from_secs(3),
        imt_mm: 1.42,
        risk: RiskLevel::High,
    };
    let mut session = ScreeningSession::new(
        token(),
        collaborators(inference, RecordingReferrals::default()),
        settings(Duration::from_secs(10)),
    );
    session.start_screening().unwrap();
    session.capture_scan().await.unwrap();

    let analysis = session.run_analysis().await.unwrap();
    assert_eq!(analysis.risk, RiskLevel::High);
    assert_eq!(session.current_stage(), WorkflowStage::Results);
}

#[tokio::test]
async fn test_failed_referral_stays_on_referral_until_retry() {
    let referrals = RecordingReferrals::failing(1);
    let mut session = ScreeningSession::new(
        token(),
        collaborators(SlowInference::instant(), referrals.clone()),
        settings(Duration::from_secs(10)),
    );
    session.start_screening().unwrap();
    session.capture_scan().await.unwrap();
    session.run_analysis().await.unwrap();
    session.confirm_results().unwrap();

    let err = session.submit_referral(nairobi()).await.unwrap_err();
    assert!(matches!(
        err,
        ScreeningError::Service(ServiceError::Referral { .. })
    ));
    assert_eq!(session.current_stage(), WorkflowStage::Referral);
    assert!(session.analysis().is_some());

    session.submit_referral(nairobi()).await.unwrap();
    assert_eq!(session.current_stage(), WorkflowStage::Dashboard);
    assert_eq!(referrals.recorded().len(), 1);
}

#[tokio::test]
async fn test_indicator_backtrack_then_forward_again() {
    let mut session = ScreeningSession::new(
        token(),
        collaborators(SlowInference::instant(), RecordingReferrals::default()),
        settings(Duration::from_secs(10)),
    );
    session.start_screening().unwrap();
    session.capture_scan().await.unwrap();
    session.run_analysis().await.unwrap();
    assert_eq!(session.current_stage(), WorkflowStage::Results);

    assert!(session.tap_indicator(WorkflowStage::Dashboard).is_navigated());
    assert_eq!(
        session.navigator().history().routes(),
        &[Route::Dashboard]
    );

    // Forward again only through the actions
    assert!(!session.tap_indicator(WorkflowStage::Results).is_navigated());
    session.start_screening().unwrap();
    assert!(session.analysis().is_none());
    assert_eq!(session.current_stage(), WorkflowStage::Scan);
}
