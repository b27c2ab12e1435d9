//! Core types for PromptLens

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single free-text request submitted for analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The raw request text, used verbatim
    pub text: String,
}

impl AnalysisRequest {
    /// Create a new analysis request
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for AnalysisRequest {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AnalysisRequest {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// One indexed segment of the input, used for display only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Left-to-right position in the input
    pub index: usize,

    /// The segment exactly as it appeared (may be empty)
    pub surface_form: String,
}

impl Token {
    /// Create a new token
    pub fn new(index: usize, surface_form: impl Into<String>) -> Self {
        Self {
            index,
            surface_form: surface_form.into(),
        }
    }

    /// Render the token as its display tag, e.g. `[T0:hello]`
    pub fn tag(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[T{}:{}]", self.index, self.surface_form)
    }
}

/// A citation attached to a response by the grounding step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    /// Link to the cited resource
    pub uri: String,

    /// Display title of the cited resource
    pub title: String,
}

impl GroundingSource {
    /// Create a new grounding source
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}
