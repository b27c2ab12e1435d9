//! Error types for PromptLens

/// Result type alias using PromptLens's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for PromptLens operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rule catalog or policy engine errors
    #[error("policy error: {0}")]
    Policy(String),

    /// Grounding collaborator errors (client construction or invocation)
    #[error("grounding error: {0}")]
    Grounding(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new policy error
    pub fn policy(msg: impl Into<String>) -> Self {
        Self::Policy(msg.into())
    }

    /// Create a new grounding error
    pub fn grounding(msg: impl Into<String>) -> Self {
        Self::Grounding(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Self::Policy(msg)
            | Self::Grounding(msg)
            | Self::Config(msg)
            | Self::Internal(msg) => msg.clone(),
            Self::Io(e) => e.to_string(),
            Self::Serialization(e) => e.to_string(),
            Self::Yaml(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::grounding("client unavailable").to_string(),
            "grounding error: client unavailable"
        );
        assert_eq!(Error::policy("bad regex").to_string(), "policy error: bad regex");
    }

    #[test]
    fn test_message_drops_prefix() {
        assert_eq!(
            Error::grounding("Check your API key setup.").message(),
            "Check your API key setup."
        );
        assert_eq!(Error::config("min > max").message(), "min > max");
    }

    #[test]
    fn test_yaml_error_conversion() {
        let err: Error = serde_yaml::from_str::<Vec<u32>>("{not: a list")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Yaml(_)));
    }
}
