use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::config::ObservabilityConfig;

/// Initialize structured logging for hosts embedding the workflow.
///
/// Honors RUST_LOG when set; otherwise falls back to the configured level.
/// Analytics/metrics export is out of scope here - this is logging only.
pub fn init_telemetry(observability: &ObservabilityConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&observability.log_level));

    if observability.json_logs {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter)
            .init();
    }

    tracing::info!("pagepress telemetry initialized with structured logging");
    Ok(())
}

/// Generate a correlation ID for linking the events of one workflow instance
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span covering one upload attempt
pub fn submission_span(section_id: &str, correlation_id: &str) -> tracing::Span {
    tracing::info_span!(
        "edit_submission",
        section.id = section_id,
        correlation.id = correlation_id,
    )
}
