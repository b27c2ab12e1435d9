//! Analysis result

use promptlens_core::{GroundingSource, Token};
use promptlens_policy::Verdict;
use serde::{Deserialize, Serialize};

/// Everything one analysis produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The request text as received
    pub raw_input: String,

    /// Display tokens
    pub tokens: Vec<Token>,

    /// Policy decision
    pub verdict: Verdict,

    /// Response shown to the user
    pub response_text: String,

    /// Citations, present only when the grounding step ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_sources: Option<Vec<GroundingSource>>,

    /// Single error indicator from the grounding collaborator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Wall-clock time of the whole analysis
    pub latency_ms: u64,
}

impl AnalysisResult {
    /// Tokens rendered as `[T{index}:{word}]` tags
    pub fn token_tags(&self) -> Vec<String> {
        self.tokens.iter().map(Token::tag).collect()
    }
}
