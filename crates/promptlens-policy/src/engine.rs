//! Policy evaluation engine

use promptlens_core::{Error, Result};
use tracing::debug;

use crate::trigger::{EvaluationContext, Matcher};
use crate::{builtin_catalog, Rule, RuleCatalog, Verdict};

/// First-match-wins policy engine
///
/// Holds the compiled catalog; evaluation is read-only, so one engine can
/// be shared across concurrent requests.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    catalog_name: String,
    rules: Vec<CompiledRule>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: Rule,
    matcher: Matcher,
}

impl PolicyEngine {
    /// Compile a catalog into an engine
    ///
    /// Disabled rules are dropped; the rest keep their relative order.
    pub fn new(catalog: RuleCatalog) -> Result<Self> {
        let mut rules = Vec::with_capacity(catalog.rules.len());

        for rule in catalog.rules {
            if !rule.enabled {
                debug!(rule = %rule.id, "Skipping disabled rule");
                continue;
            }
            if rules.iter().any(|c: &CompiledRule| c.rule.id == rule.id) {
                return Err(Error::policy(format!("duplicate rule id '{}'", rule.id)));
            }

            let matcher = rule
                .trigger
                .compile()
                .map_err(|e| Error::policy(format!("rule '{}': {}", rule.id, e.message())))?;
            rules.push(CompiledRule { rule, matcher });
        }

        Ok(Self {
            catalog_name: catalog.name,
            rules,
        })
    }

    /// Engine over the built-in catalog
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_catalog())
    }

    /// The first enabled rule that fires for `text`, if any
    pub fn first_match(&self, text: &str) -> Option<&Rule> {
        let ctx = EvaluationContext::new(text);
        self.rules
            .iter()
            .find(|compiled| compiled.matcher.is_match(&ctx))
            .map(|compiled| &compiled.rule)
    }

    /// Evaluate one request
    pub fn evaluate(&self, text: &str) -> Verdict {
        match self.first_match(text) {
            Some(rule) => {
                debug!(
                    rule = %rule.id,
                    category = %rule.category,
                    action = %rule.action,
                    "Rule matched"
                );
                Verdict::from_rule(rule)
            }
            None => Verdict::allowed(),
        }
    }

    /// Active rules in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|c| &c.rule)
    }

    /// Name of the loaded catalog
    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::builtin().expect("Failed to compile built-in rule catalog")
    }
}
