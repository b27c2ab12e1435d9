//! Static grounding citations
//!
//! Stand-in for a retrieval-backed model call: citations come from a fixed
//! table keyed on keyword presence. Grounding never changes the verdict or
//! the response text.

use async_trait::async_trait;
use promptlens_core::{GroundingSource, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default simulated delay for the static provider
pub const DEFAULT_GROUNDING_DELAY: Duration = Duration::from_millis(300);

/// Citations returned when a keyword is present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingEntry {
    /// Lower-case keyword to look for
    pub keyword: String,

    /// Citations attached when the keyword is present
    pub sources: Vec<GroundingSource>,
}

/// Keyword-to-citations lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingTable {
    entries: Vec<GroundingEntry>,
}

impl GroundingTable {
    /// Create a table from entries
    pub fn new(entries: Vec<GroundingEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut e| {
                e.keyword = e.keyword.to_lowercase();
                e
            })
            .collect();
        Self { entries }
    }

    /// The built-in table
    pub fn builtin() -> Self {
        Self::new(vec![GroundingEntry {
            keyword: "latest news".to_string(),
            sources: vec![
                GroundingSource::new("https://example.com/news1", "Recent Tech Breakthroughs"),
                GroundingSource::new("https://example.com/news2", "Global Market Update"),
            ],
        }])
    }

    /// Citations for every entry whose keyword occurs in `text` (case-insensitive)
    pub fn lookup(&self, text: &str) -> Vec<GroundingSource> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .filter(|e| lowered.contains(&e.keyword))
            .flat_map(|e| e.sources.iter().cloned())
            .collect()
    }
}

impl Default for GroundingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Look up citations in the built-in table
pub fn augment(text: &str) -> Vec<GroundingSource> {
    GroundingTable::builtin().lookup(text)
}

/// A collaborator that attaches citations to a request
#[async_trait]
pub trait GroundingProvider: Send + Sync {
    /// Fetch citations for the given text
    async fn ground(&self, text: &str) -> Result<Vec<GroundingSource>>;

    /// Provider name, for logs
    fn name(&self) -> &str;
}

/// Table-backed provider with a fixed simulated delay
#[derive(Debug, Clone)]
pub struct StaticGroundingProvider {
    table: GroundingTable,
    delay: Duration,
}

impl StaticGroundingProvider {
    /// Built-in table with the default delay
    pub fn new() -> Self {
        Self {
            table: GroundingTable::builtin(),
            delay: DEFAULT_GROUNDING_DELAY,
        }
    }

    /// Set the simulated delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for StaticGroundingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroundingProvider for StaticGroundingProvider {
    async fn ground(&self, text: &str) -> Result<Vec<GroundingSource>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let sources = self.table.lookup(text);
        debug!(count = sources.len(), "Static grounding lookup");
        Ok(sources)
    }

    fn name(&self) -> &str {
        "static"
    }
}
