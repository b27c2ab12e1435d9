//! PromptLens Analyzer
//!
//! The single entry point the presentation layer calls. An [`Analyzer`]
//! runs one request through the pipeline:
//!
//! 1. tokenize the text for display
//! 2. wait out the simulated model latency
//! 3. evaluate the rule catalog (first match wins)
//! 4. synthesize the response text
//! 5. optionally attach grounding citations through the model client
//!
//! and returns an [`AnalysisResult`] stamped with the elapsed time.

pub mod analyzer;
pub mod config;
pub mod latency;
pub mod model_client;
pub mod result;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::{AnalyzerConfig, ConfigOverrides, GroundingConfig, LatencyConfig, PolicyConfig};
pub use latency::{FixedLatency, LatencyModel, NoLatency, UniformLatency};
pub use model_client::{ApiKeyClientFactory, ModelClientFactory, NoModelClient};
pub use result::AnalysisResult;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::{Analyzer, AnalyzerBuilder};
    pub use crate::config::AnalyzerConfig;
    pub use crate::result::AnalysisResult;
    pub use promptlens_core::AnalysisRequest;
}
