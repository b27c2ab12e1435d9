//! Model client seam
//!
//! Grounding only runs when a model client is available. A factory is asked
//! for one on every analysis, after the verdict and response are computed,
//! so a missing or broken client never costs the rest of the result.

use promptlens_core::{Error, Result};
use promptlens_responder::{GroundingProvider, StaticGroundingProvider};
use std::sync::Arc;
use std::time::Duration;

/// Key value treated the same as no key at all
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Produces the grounding collaborator for a request
pub trait ModelClientFactory: Send + Sync {
    /// `Ok(None)` when no client is configured; `Err` when construction fails
    fn connect(&self) -> Result<Option<Arc<dyn GroundingProvider>>>;
}

/// Never provides a client; grounding is skipped
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModelClient;

impl ModelClientFactory for NoModelClient {
    fn connect(&self) -> Result<Option<Arc<dyn GroundingProvider>>> {
        Ok(None)
    }
}

/// Provides the static grounding provider when an API key is configured
#[derive(Debug, Clone)]
pub struct ApiKeyClientFactory {
    api_key: Option<String>,
    grounding_delay: Duration,
}

impl ApiKeyClientFactory {
    /// Create a factory for the given key
    pub fn new(api_key: Option<String>, grounding_delay: Duration) -> Self {
        Self {
            api_key,
            grounding_delay,
        }
    }
}

impl ModelClientFactory for ApiKeyClientFactory {
    fn connect(&self) -> Result<Option<Arc<dyn GroundingProvider>>> {
        let key = match self.api_key.as_deref() {
            None | Some("") | Some(PLACEHOLDER_API_KEY) => return Ok(None),
            Some(key) => key,
        };

        if key.trim().is_empty() || key.chars().any(char::is_whitespace) {
            return Err(Error::grounding(
                "Failed to initialize model client. Check your API key setup.",
            ));
        }

        let provider = StaticGroundingProvider::new().with_delay(self.grounding_delay);
        Ok(Some(Arc::new(provider)))
    }
}
