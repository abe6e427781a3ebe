use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::ObservabilityConfig;
use crate::workflow::WorkflowStage;

/// Initialize structured logging on stderr. RUST_LOG wins over the configured level.
pub fn init_telemetry(observability: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&observability.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);
    if observability.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()?;
    }

    tracing::info!("Carotid screen telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking the steps of one screening
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common screening attributes
pub fn create_screening_span(
    operation: &str,
    patient_id: Option<&str>,
    stage: WorkflowStage,
    correlation_id: Option<&str>,
) -> tracing::Span {
    tracing::info_span!(
        "screening",
        operation = operation,
        patient.id = patient_id,
        stage = %stage,
        correlation.id = correlation_id,
    )
}

/// Shutdown telemetry gracefully
pub fn shutdown_telemetry() {
    // Plain fmt layers flush on every event
    tracing::info!("Carotid screen telemetry shutdown complete");
}
