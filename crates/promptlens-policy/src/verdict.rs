//! Policy evaluation outcome

use serde::{Deserialize, Serialize};

use crate::{Action, Category, Rule};

/// Outcome of evaluating one request
///
/// `passed` always equals `action == Action::Allowed`. Build verdicts through
/// the constructors to keep that true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether the request may proceed
    pub passed: bool,

    /// Why the rule fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Category reported by the rule, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Action taken
    pub action: Action,

    /// Id of the rule that fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_rule: Option<String>,
}

impl Verdict {
    /// Verdict when no rule matched
    pub fn allowed() -> Self {
        Self {
            passed: true,
            reason: None,
            category: None,
            action: Action::Allowed,
            matched_rule: None,
        }
    }

    /// Verdict produced by a rule firing
    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            passed: rule.action == Action::Allowed,
            reason: Some(rule.reason.clone()),
            category: Some(rule.category),
            action: rule.action,
            matched_rule: Some(rule.id.clone()),
        }
    }

    /// A blocking verdict that did not come from a catalog rule
    pub fn blocked(category: Option<Category>, reason: Option<String>) -> Self {
        Self {
            passed: false,
            reason,
            category,
            action: Action::Blocked,
            matched_rule: None,
        }
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::allowed()
    }
}
