//! Analysis orchestrator

use promptlens_core::{tokenize, AnalysisRequest, GroundingSource, Result};
use promptlens_policy::{PolicyEngine, RuleCatalog};
use promptlens_responder::{ResponseSynthesizer, ResponseTemplates};
use promptlens_telemetry::MetricsCollector;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::config::AnalyzerConfig;
use crate::latency::{LatencyModel, UniformLatency};
use crate::model_client::{ModelClientFactory, NoModelClient};
use crate::result::AnalysisResult;

/// Runs requests through the moderation pipeline
///
/// Cheap to clone; clones share the compiled catalog, templates, and
/// metrics. Concurrent calls need no coordination.
#[derive(Clone)]
pub struct Analyzer {
    engine: Arc<PolicyEngine>,
    synthesizer: Arc<ResponseSynthesizer>,
    latency: Arc<dyn LatencyModel>,
    model_client: Arc<dyn ModelClientFactory>,
    metrics: MetricsCollector,
}

impl Analyzer {
    /// Start building an analyzer
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Build an analyzer from configuration
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .latency(config.latency_model()?)
            .model_client(config.model_client());

        if let Some(path) = &config.policy.catalog_path {
            info!(path = %path, "Loading rule catalog");
            builder = builder.catalog(RuleCatalog::from_file(path)?);
        }

        builder.build()
    }

    /// Analyze one request
    #[instrument(skip_all, fields(chars = request.text.chars().count()))]
    pub async fn analyze(&self, request: AnalysisRequest) -> AnalysisResult {
        let start = Instant::now();
        let text = request.text;

        let tokens = tokenize(&text);

        let delay = self.latency.sample();
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "Simulating model latency");
            tokio::time::sleep(delay).await;
        }

        let verdict = self.engine.evaluate(&text);
        let response_text = self.synthesizer.synthesize(&text, &verdict);
        let (grounding_sources, error) = self.ground(&text).await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let category = verdict.category.map_or("none", |c| c.as_str());
        metrics::counter!("promptlens_requests_total").increment(1);
        metrics::counter!(
            "promptlens_decisions_total",
            "action" => verdict.action.as_str(),
            "category" => category
        )
        .increment(1);
        metrics::histogram!("promptlens_analysis_latency_ms").record(latency_ms as f64);
        self.metrics.record_analysis(&verdict, latency_ms);

        info!(
            action = %verdict.action,
            category = %category,
            rule = verdict.matched_rule.as_deref().unwrap_or("-"),
            latency_ms,
            "Analysis complete"
        );

        AnalysisResult {
            raw_input: text,
            tokens,
            verdict,
            response_text,
            grounding_sources,
            error,
            latency_ms,
        }
    }

    /// Analyze raw text
    pub async fn analyze_text(&self, text: impl Into<String>) -> AnalysisResult {
        self.analyze(AnalysisRequest::new(text)).await
    }

    /// Run the optional grounding step
    ///
    /// Sources are set only when citations came back; failures become a
    /// single message.
    async fn ground(&self, text: &str) -> (Option<Vec<GroundingSource>>, Option<String>) {
        let provider = match self.model_client.connect() {
            Ok(Some(provider)) => provider,
            Ok(None) => {
                debug!("No model client configured, skipping grounding");
                return (None, None);
            }
            Err(e) => {
                warn!(error = %e, "Model client unavailable");
                self.record_grounding_error();
                return (None, Some(e.message()));
            }
        };

        self.metrics.record_grounding();
        match provider.ground(text).await {
            Ok(sources) => {
                debug!(provider = provider.name(), count = sources.len(), "Grounding complete");
                ((!sources.is_empty()).then_some(sources), None)
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "Grounding failed");
                self.record_grounding_error();
                (None, Some(e.message()))
            }
        }
    }

    fn record_grounding_error(&self) {
        metrics::counter!("promptlens_grounding_errors_total").increment(1);
        self.metrics.record_grounding_error();
    }

    /// The compiled policy engine
    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    /// Metrics shared by this analyzer and its clones
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }
}

/// Builder for [`Analyzer`]
#[derive(Default)]
pub struct AnalyzerBuilder {
    catalog: Option<RuleCatalog>,
    engine: Option<PolicyEngine>,
    templates: Option<ResponseTemplates>,
    latency: Option<Arc<dyn LatencyModel>>,
    model_client: Option<Arc<dyn ModelClientFactory>>,
    metrics: Option<MetricsCollector>,
}

impl AnalyzerBuilder {
    /// Use a rule catalog instead of the built-in one
    pub fn catalog(mut self, catalog: RuleCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use an already compiled engine; takes precedence over `catalog`
    pub fn engine(mut self, engine: PolicyEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Use custom response templates
    pub fn templates(mut self, templates: ResponseTemplates) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Set the latency model (default: uniform 500-1500ms)
    pub fn latency(mut self, latency: Arc<dyn LatencyModel>) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Set the model client factory (default: none, grounding skipped)
    pub fn model_client(mut self, model_client: Arc<dyn ModelClientFactory>) -> Self {
        self.model_client = Some(model_client);
        self
    }

    /// Share an existing metrics collector
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Build the analyzer, compiling the catalog if needed
    pub fn build(self) -> Result<Analyzer> {
        let engine = match (self.engine, self.catalog) {
            (Some(engine), _) => engine,
            (None, Some(catalog)) => PolicyEngine::new(catalog)?,
            (None, None) => PolicyEngine::builtin()?,
        };

        let synthesizer = ResponseSynthesizer::with_templates(self.templates.unwrap_or_default());

        Ok(Analyzer {
            engine: Arc::new(engine),
            synthesizer: Arc::new(synthesizer),
            latency: self
                .latency
                .unwrap_or_else(|| Arc::new(UniformLatency::default())),
            model_client: self.model_client.unwrap_or_else(|| Arc::new(NoModelClient)),
            metrics: self.metrics.unwrap_or_default(),
        })
    }
}
