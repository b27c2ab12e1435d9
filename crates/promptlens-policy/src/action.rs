//! Policy action and category definitions
//!
//! Action and category are independent axes: a rule may annotate a request
//! with a category while still allowing it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the pipeline does with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Request proceeds to the model
    #[default]
    Allowed,
    /// Request is refused with a canned response
    Blocked,
    /// Request proceeds in altered form
    Modified,
}

impl Action {
    /// Wire name of this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Blocked => "blocked",
            Self::Modified => "modified",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy category a rule reports
///
/// The "none" category is represented by the absence of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Requests for harmful or hateful content
    Harmful,
    /// Personally identifiable information
    #[serde(rename = "PII")]
    Pii,
    /// Attempts to subvert instructions or run commands
    JailbreakAttempt,
    /// Domain or business policy context
    PolicyViolation,
    /// Active scripting content (cross-site scripting)
    XssPayload,
}

impl Category {
    /// All categories, in reporting order
    pub const ALL: [Category; 5] = [
        Self::Harmful,
        Self::Pii,
        Self::JailbreakAttempt,
        Self::PolicyViolation,
        Self::XssPayload,
    ];

    /// Wire name of this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Harmful => "harmful",
            Self::Pii => "PII",
            Self::JailbreakAttempt => "jailbreak_attempt",
            Self::PolicyViolation => "policy_violation",
            Self::XssPayload => "xss_payload",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_pii_deserializes_uppercase() {
        let category: Category = serde_json::from_str(r#""PII""#).unwrap();
        assert_eq!(category, Category::Pii);
    }

    #[test]
    fn test_action_wire_names() {
        let action: Action = serde_json::from_str(r#""modified""#).unwrap();
        assert_eq!(action, Action::Modified);
        assert_eq!(Action::Blocked.to_string(), "blocked");
    }
}
