//! PromptLens Policy Engine
//!
//! Ordered, first-match-wins rule evaluation for incoming requests.
//!
//! A [`RuleCatalog`] is an explicit ordered list of rules. Each rule pairs a
//! [`Trigger`] (a regex pattern set or a keyword list) with the
//! [`Category`], [`Action`], and reason it produces when it fires. Position
//! in the catalog is precedence: the [`PolicyEngine`] stops at the first
//! rule that matches and turns it into a [`Verdict`].

pub mod action;
pub mod catalog;
pub mod engine;
pub mod rule;
pub mod trigger;
pub mod verdict;

pub use action::{Action, Category};
pub use catalog::builtin_catalog;
pub use engine::PolicyEngine;
pub use rule::{Rule, RuleCatalog};
pub use trigger::Trigger;
pub use verdict::Verdict;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::{Action, Category};
    pub use crate::engine::PolicyEngine;
    pub use crate::rule::{Rule, RuleCatalog};
    pub use crate::trigger::Trigger;
    pub use crate::verdict::Verdict;
}
