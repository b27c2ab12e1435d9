use crate::config::DemoConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use parking_lot::RwLock;
use promptlens_analyzer::{AnalysisResult, Analyzer};
use std::collections::VecDeque;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Pipeline entry point
    pub analyzer: Analyzer,

    /// Front-end configuration
    pub config: Arc<DemoConfig>,

    /// Recent analyses, newest first
    pub history: Arc<RwLock<VecDeque<AnalysisResult>>>,

    /// Prometheus exporter, absent when no recorder was installed
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(analyzer: Analyzer, config: DemoConfig) -> Self {
        let capacity = config.server.history_size;
        Self {
            analyzer,
            config: Arc::new(config),
            history: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Add a result to history
    pub fn record(&self, result: AnalysisResult) {
        let limit = self.config.server.history_size;
        if limit == 0 {
            return;
        }
        let mut history = self.history.write();
        history.push_front(result);
        while history.len() > limit {
            history.pop_back();
        }
    }

    /// Get recent results
    pub fn recent(&self, limit: usize) -> Vec<AnalysisResult> {
        let history = self.history.read();
        history.iter().take(limit).cloned().collect()
    }
}
