//! PromptLens Telemetry
//!
//! Lock-free counters describing what the analysis pipeline has decided,
//! for dashboards and the stats endpoint.

pub mod metrics;

pub use metrics::{MetricsCollector, MetricsSnapshot};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::metrics::{MetricsCollector, MetricsSnapshot};
}
