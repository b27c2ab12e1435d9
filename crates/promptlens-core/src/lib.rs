//! PromptLens Core
//!
//! Core types and utilities shared across PromptLens components.
//!
//! This crate provides:
//! - Request, token, and grounding citation types
//! - The whitespace tokenizer used for diagnostic token breakdowns
//! - Error types and result handling

pub mod error;
pub mod tokenizer;
pub mod types;

pub use error::{Error, Result};
pub use tokenizer::tokenize;
pub use types::{AnalysisRequest, GroundingSource, Token};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::tokenizer::tokenize;
    pub use crate::types::{AnalysisRequest, GroundingSource, Token};
}
