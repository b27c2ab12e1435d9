use promptlens_analyzer::{AnalyzerConfig, ConfigOverrides};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Front-end configuration: analyzer settings plus the HTTP surface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(flatten)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl DemoConfig {
    /// Load configuration from file (if present) and apply overrides
    pub fn load(config_path: &Path, overrides: &ConfigOverrides) -> anyhow::Result<Self> {
        let config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        Ok(Self {
            analyzer: config.analyzer.with_overrides(overrides)?,
            server: config.server,
        })
    }
}

/// HTTP surface configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Longest request text accepted by `POST /api/analyze`, in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Number of recent analyses kept for `GET /api/history`
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            history_size: default_history_size(),
        }
    }
}

fn default_max_input_chars() -> usize {
    10_000
}

fn default_history_size() -> usize {
    100
}
