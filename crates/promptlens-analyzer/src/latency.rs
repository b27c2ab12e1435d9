//! Simulated model latency
//!
//! The analyzer sleeps for a sampled duration before evaluating, standing in
//! for the round trip to a hosted model. A real latency or failure model
//! plugs in here without touching classification.

use promptlens_core::{Error, Result};
use rand::Rng;
use std::fmt::Debug;
use std::time::Duration;

/// Source of per-request delays
pub trait LatencyModel: Send + Sync + Debug {
    /// Delay to apply to the next request
    fn sample(&self) -> Duration;
}

/// Uniformly random delay in an inclusive millisecond range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformLatency {
    min_ms: u64,
    max_ms: u64,
}

impl UniformLatency {
    /// Create a range; `min_ms` must not exceed `max_ms`
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self> {
        if min_ms > max_ms {
            return Err(Error::config(format!(
                "latency range is inverted: min {}ms > max {}ms",
                min_ms, max_ms
            )));
        }
        Ok(Self { min_ms, max_ms })
    }

    /// Lower bound in milliseconds
    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    /// Upper bound in milliseconds
    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }
}

impl Default for UniformLatency {
    fn default() -> Self {
        Self {
            min_ms: 500,
            max_ms: 1500,
        }
    }
}

impl LatencyModel for UniformLatency {
    fn sample(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }
}

/// Constant delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency(pub Duration);

impl LatencyModel for FixedLatency {
    fn sample(&self) -> Duration {
        self.0
    }
}

/// No delay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLatency;

impl LatencyModel for NoLatency {
    fn sample(&self) -> Duration {
        Duration::ZERO
    }
}
