//! Rule and rule catalog definitions

use promptlens_core::Result;
use serde::{Deserialize, Serialize};

use crate::{Action, Category, Trigger};

/// An ordered rule catalog; position in `rules` is precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCatalog {
    /// Catalog name
    pub name: String,

    /// Description of what this catalog enforces
    #[serde(default)]
    pub description: String,

    /// Version of the catalog
    #[serde(default)]
    pub version: String,

    /// Rules, highest precedence first
    pub rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Load a catalog from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a catalog from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look up a rule by id
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }
}

/// A single rule within a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Rule identifier
    pub id: String,

    /// Description of what this rule does
    #[serde(default)]
    pub description: String,

    /// Trigger condition
    pub trigger: Trigger,

    /// Category reported when the rule fires
    pub category: Category,

    /// Human-readable reason reported when the rule fires
    pub reason: String,

    /// Action taken when the rule fires
    pub action: Action,

    /// Whether this rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Rule {
    /// Create an enabled rule
    pub fn new(
        id: impl Into<String>,
        trigger: Trigger,
        category: Category,
        action: Action,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            trigger,
            category,
            reason: reason.into(),
            action,
            enabled: true,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

fn default_true() -> bool {
    true
}
