//! Analyzer configuration

use promptlens_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::latency::{LatencyModel, NoLatency, UniformLatency};
use crate::model_client::{ApiKeyClientFactory, ModelClientFactory, NoModelClient};

/// Analyzer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Simulated model latency
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Grounding step
    #[serde(default)]
    pub grounding: GroundingConfig,

    /// Rule catalog source
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Model client API key
    pub api_key: Option<String>,

    /// Rule catalog file
    pub catalog_path: Option<String>,

    /// Disable simulated latency
    pub no_delay: bool,
}

impl AnalyzerConfig {
    /// Parse configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides, then validate the result
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        self.apply(overrides);
        self.validate()?;
        Ok(self)
    }

    /// Apply overrides in place
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(api_key) = &overrides.api_key {
            self.grounding.api_key = Some(api_key.clone());
        }

        if let Some(catalog_path) = &overrides.catalog_path {
            self.policy.catalog_path = Some(catalog_path.clone());
        }

        if overrides.no_delay {
            self.latency.enabled = false;
            self.grounding.delay_ms = 0;
        }
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.latency.min_ms > self.latency.max_ms {
            return Err(Error::config(format!(
                "latency.min_ms ({}) exceeds latency.max_ms ({})",
                self.latency.min_ms, self.latency.max_ms
            )));
        }
        Ok(())
    }

    /// Latency model described by this config
    pub fn latency_model(&self) -> Result<Arc<dyn LatencyModel>> {
        if !self.latency.enabled {
            return Ok(Arc::new(NoLatency));
        }
        Ok(Arc::new(UniformLatency::new(
            self.latency.min_ms,
            self.latency.max_ms,
        )?))
    }

    /// Model client factory described by this config
    pub fn model_client(&self) -> Arc<dyn ModelClientFactory> {
        if !self.grounding.enabled {
            return Arc::new(NoModelClient);
        }
        Arc::new(ApiKeyClientFactory::new(
            self.grounding.api_key.clone(),
            Duration::from_millis(self.grounding.delay_ms),
        ))
    }
}

/// Simulated latency configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Apply a delay at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Lower bound in milliseconds
    #[serde(default = "default_min_ms")]
    pub min_ms: u64,

    /// Upper bound in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
        }
    }
}

/// Grounding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingConfig {
    /// Allow the grounding step to run when a key is present
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Simulated delay of the grounding call in milliseconds
    #[serde(default = "default_grounding_delay_ms")]
    pub delay_ms: u64,

    /// Model client API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: default_grounding_delay_ms(),
            api_key: None,
        }
    }
}

/// Rule catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// YAML catalog replacing the built-in rules
    #[serde(default)]
    pub catalog_path: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_min_ms() -> u64 {
    500
}

fn default_max_ms() -> u64 {
    1500
}

fn default_grounding_delay_ms() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert!(config.latency.enabled);
        assert_eq!((config.latency.min_ms, config.latency.max_ms), (500, 1500));
        assert_eq!(config.grounding.delay_ms, 300);
        assert!(config.grounding.api_key.is_none());
        assert!(config.policy.catalog_path.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = AnalyzerConfig::from_yaml("latency:\n  max_ms: 900\n").unwrap();
        assert_eq!(config.latency.min_ms, 500);
        assert_eq!(config.latency.max_ms, 900);
        assert!(config.grounding.enabled);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = AnalyzerConfig::from_yaml("latency:\n  min_ms: 2000\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = AnalyzerConfig::default()
            .with_overrides(&ConfigOverrides::default())
            .unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let overrides = ConfigOverrides {
            api_key: Some("from-env".to_string()),
            no_delay: true,
            ..Default::default()
        };
        let config = AnalyzerConfig::from_yaml("grounding:\n  api_key: from-file\n  delay_ms: 50\n")
            .unwrap()
            .with_overrides(&overrides)
            .unwrap();

        assert_eq!(config.grounding.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.grounding.delay_ms, 0);
        assert!(!config.latency.enabled);
    }

    #[test]
    fn test_api_key_never_serialized() {
        let mut config = AnalyzerConfig::default();
        config.grounding.api_key = Some("secret".to_string());
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("secret"));
    }

    #[test]
    fn test_disabled_latency_is_zero() {
        let mut config = AnalyzerConfig::default();
        config.latency.enabled = false;
        assert!(config.latency_model().unwrap().sample().is_zero());
    }

    #[test]
    fn test_disabled_grounding_never_connects() {
        let mut config = AnalyzerConfig::default();
        config.grounding.api_key = Some("sk-live".to_string());
        config.grounding.enabled = false;
        assert!(config.model_client().connect().unwrap().is_none());
    }
}
