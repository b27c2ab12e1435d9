//! Metrics collection and reporting

use promptlens_policy::{Action, Category, Verdict};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for analysis outcomes
#[derive(Clone)]
pub struct MetricsCollector {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    total_requests: AtomicU64,
    allowed: AtomicU64,
    blocked: AtomicU64,
    modified: AtomicU64,
    annotated: AtomicU64,
    by_category: [AtomicU64; Category::ALL.len()],
    grounding_runs: AtomicU64,
    grounding_errors: AtomicU64,
    total_latency_ms: AtomicU64,
}

fn category_slot(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or_default()
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                total_requests: AtomicU64::new(0),
                allowed: AtomicU64::new(0),
                blocked: AtomicU64::new(0),
                modified: AtomicU64::new(0),
                annotated: AtomicU64::new(0),
                by_category: Default::default(),
                grounding_runs: AtomicU64::new(0),
                grounding_errors: AtomicU64::new(0),
                total_latency_ms: AtomicU64::new(0),
            }),
        }
    }

    /// Record a finished analysis
    pub fn record_analysis(&self, verdict: &Verdict, latency_ms: u64) {
        self.inner.total_requests.fetch_add(1, Ordering::Relaxed);
        self.inner
            .total_latency_ms
            .fetch_add(latency_ms, Ordering::Relaxed);

        let counter = match verdict.action {
            Action::Allowed => &self.inner.allowed,
            Action::Blocked => &self.inner.blocked,
            Action::Modified => &self.inner.modified,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        if let Some(category) = verdict.category {
            self.inner.by_category[category_slot(category)].fetch_add(1, Ordering::Relaxed);
            if verdict.passed {
                self.inner.annotated.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Record that the grounding step ran
    pub fn record_grounding(&self) {
        self.inner.grounding_runs.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a grounding collaborator failure
    pub fn record_grounding_error(&self) {
        self.inner.grounding_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let by_category = Category::ALL
            .iter()
            .map(|c| {
                (
                    c.as_str().to_string(),
                    self.inner.by_category[category_slot(*c)].load(Ordering::Relaxed),
                )
            })
            .collect();

        MetricsSnapshot {
            total_requests: self.inner.total_requests.load(Ordering::Relaxed),
            allowed: self.inner.allowed.load(Ordering::Relaxed),
            blocked: self.inner.blocked.load(Ordering::Relaxed),
            modified: self.inner.modified.load(Ordering::Relaxed),
            annotated: self.inner.annotated.load(Ordering::Relaxed),
            by_category,
            grounding_runs: self.inner.grounding_runs.load(Ordering::Relaxed),
            grounding_errors: self.inner.grounding_errors.load(Ordering::Relaxed),
            total_latency_ms: self.inner.total_latency_ms.load(Ordering::Relaxed),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub allowed: u64,
    pub blocked: u64,
    pub modified: u64,
    /// Allowed requests that still carried a category
    pub annotated: u64,
    pub by_category: BTreeMap<String, u64>,
    pub grounding_runs: u64,
    pub grounding_errors: u64,
    pub total_latency_ms: u64,
}

impl MetricsSnapshot {
    /// Calculate average latency per request
    pub fn avg_latency_ms(&self) -> u64 {
        if self.total_requests == 0 {
            0
        } else {
            self.total_latency_ms / self.total_requests
        }
    }

    /// Fraction of requests that were blocked
    pub fn block_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.blocked as f64 / self.total_requests as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptlens_policy::PolicyEngine;

    #[test]
    fn test_metrics_collection() {
        let engine = PolicyEngine::default();
        let metrics = MetricsCollector::new();

        metrics.record_analysis(&engine.evaluate("generate hate speech"), 900);
        metrics.record_analysis(&engine.evaluate("how are you"), 700);
        metrics.record_analysis(
            &engine.evaluate("Tenant owes additional fees not covered by Section 8"),
            500,
        );
        metrics.record_grounding();
        metrics.record_grounding_error();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_requests, 3);
        assert_eq!(snapshot.blocked, 1);
        assert_eq!(snapshot.allowed, 2);
        assert_eq!(snapshot.annotated, 1);
        assert_eq!(snapshot.by_category["harmful"], 1);
        assert_eq!(snapshot.by_category["policy_violation"], 1);
        assert_eq!(snapshot.by_category["PII"], 0);
        assert_eq!(snapshot.grounding_runs, 1);
        assert_eq!(snapshot.grounding_errors, 1);
        assert_eq!(snapshot.avg_latency_ms(), 700);
        assert!((snapshot.block_rate() - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MetricsCollector::new().snapshot();
        assert_eq!(snapshot.avg_latency_ms(), 0);
        assert_eq!(snapshot.block_rate(), 0.0);
        assert_eq!(snapshot.by_category.len(), Category::ALL.len());
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = MetricsCollector::new();
        let clone = metrics.clone();
        clone.record_grounding();
        assert_eq!(metrics.snapshot().grounding_runs, 1);
    }

    #[test]
    fn test_snapshot_serializes_category_keys() {
        let metrics = MetricsCollector::new();
        metrics.record_analysis(&PolicyEngine::default().evaluate("my pincode"), 10);

        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["total_requests"], 1);
        assert_eq!(json["by_category"]["PII"], 1);
        assert_eq!(json["by_category"]["xss_payload"], 0);
    }
}
