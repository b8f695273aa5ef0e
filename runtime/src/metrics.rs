//! Prometheus metrics for observability and monitoring.
//!
//! The store records metrics through the `metrics` facade on every action.
//! Without an installed recorder those calls are no-ops. Installing a
//! [`MetricsRecorder`] registers metric descriptions and a Prometheus recorder
//! whose text exposition can be rendered on demand; nothing listens on a
//! socket.
//!
//! # Example
//!
//! ```rust,no_run
//! use taskboard_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut recorder = MetricsRecorder::new();
//! recorder.start()?;
//!
//! // ... drive a store ...
//!
//! if let Some(text) = recorder.render() {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use thiserror::Error;

// Re-export metrics macros for use in other modules
pub use metrics::{counter, histogram};

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Process-wide Prometheus recorder.
#[derive(Default)]
pub struct MetricsRecorder {
    handle: Option<PrometheusHandle>,
}

impl MetricsRecorder {
    /// Create a recorder that has not been installed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Register metric descriptions and install the Prometheus recorder.
    ///
    /// # Errors
    ///
    /// Returns error if the exporter cannot be built or installed.
    ///
    /// # Note
    ///
    /// Only one recorder can be installed per process. If one already is
    /// (e.g. another test installed it), this logs a warning, returns `Ok`
    /// and [`MetricsRecorder::render`] yields `None`.
    pub fn start(&mut self) -> Result<(), MetricsError> {
        register_metrics();

        let builder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[0.000_001, 0.000_01, 0.000_1, 0.001, 0.01, 0.1],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?;

        match builder.install_recorder() {
            Ok(handle) => {
                self.handle = Some(handle);
                tracing::info!("Metrics recorder installed");
                Ok(())
            },
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    tracing::warn!("Metrics recorder already initialized, skipping re-initialization");
                    Ok(())
                } else {
                    Err(MetricsError::Install(err_msg))
                }
            },
        }
    }

    /// Get the metrics handle for rendering.
    #[must_use]
    pub const fn handle(&self) -> Option<&PrometheusHandle> {
        self.handle.as_ref()
    }

    /// Render current metrics in Prometheus text format.
    ///
    /// Returns `None` if this recorder was not the one installed.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!(
        "store_actions_total",
        "Total number of actions reduced by a store, labelled by action name"
    );
    describe_histogram!(
        "store_reducer_duration_seconds",
        "Time spent inside the reducer for one action"
    );
    describe_counter!(
        "store_effects_total",
        "Total number of effects executed, labelled by effect type"
    );
    describe_counter!(
        "store_rejected_follow_ups_total",
        "Follow-up actions dropped because the feedback depth limit was reached"
    );
}

/// Store metrics recorder.
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record an action processed.
    pub fn record_action(action: &'static str, duration: Duration) {
        counter!("store_actions_total", "action" => action).increment(1);
        histogram!("store_reducer_duration_seconds").record(duration.as_secs_f64());
    }

    /// Record an effect execution.
    pub fn record_effect(kind: &'static str) {
        counter!("store_effects_total", "type" => kind).increment(1);
    }

    /// Record a follow-up rejected by the depth limit.
    pub fn record_rejection() {
        counter!("store_rejected_follow_ups_total").increment(1);
    }
}
