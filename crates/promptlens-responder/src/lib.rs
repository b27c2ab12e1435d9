//! PromptLens Responder
//!
//! Turns a policy verdict into the user-facing response text, and attaches
//! optional grounding citations.
//!
//! - [`ResponseSynthesizer`] picks a canned refusal by category for blocked
//!   requests, or a canned answer by keyword for allowed ones.
//! - [`augment`] and [`StaticGroundingProvider`] look up static citations
//!   keyed on keywords in the request.

pub mod grounding;
pub mod synthesizer;
pub mod templates;

pub use grounding::{augment, GroundingEntry, GroundingProvider, GroundingTable, StaticGroundingProvider};
pub use synthesizer::ResponseSynthesizer;
pub use templates::{CannedAnswer, ResponseTemplates};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::grounding::{augment, GroundingProvider, StaticGroundingProvider};
    pub use crate::synthesizer::ResponseSynthesizer;
    pub use crate::templates::{CannedAnswer, ResponseTemplates};
}
