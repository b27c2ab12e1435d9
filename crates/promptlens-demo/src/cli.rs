use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptlens")]
#[command(
    author,
    version,
    about = "Screen free-text requests against PromptLens safety rules"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "promptlens.yaml")]
    pub config: PathBuf,

    /// Model client API key; grounding runs only when set
    #[arg(long, global = true, env = "PROMPTLENS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Rule catalog YAML replacing the built-in rules
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single request and print the result
    Analyze {
        /// Request text
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Skip the simulated model latency
        #[arg(long)]
        no_delay: bool,
    },

    /// List the active rules in evaluation order
    Rules {
        /// Print the rules as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP API
    Serve {
        /// Listen port
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Skip the simulated model latency
        #[arg(long)]
        no_delay: bool,
    },
}

impl Commands {
    /// Whether this command asked to skip simulated latency
    pub fn no_delay(&self) -> bool {
        match self {
            Self::Analyze { no_delay, .. } | Self::Serve { no_delay, .. } => *no_delay,
            Self::Rules { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["promptlens", "analyze", "how are you", "--json"]).unwrap();
        match cli.command {
            Commands::Analyze { text, json, no_delay } => {
                assert_eq!(text, "how are you");
                assert!(json);
                assert!(!no_delay);
            }
            _ => panic!("Wrong command"),
        }
        assert_eq!(cli.config, PathBuf::from("promptlens.yaml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "promptlens",
            "serve",
            "--port",
            "8080",
            "--catalog",
            "rules.yaml",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.catalog.as_deref(), Some("rules.yaml"));
        assert!(matches!(cli.command, Commands::Serve { port: 8080, .. }));
    }

    #[test]
    fn test_rules_never_delays() {
        let cli = Cli::try_parse_from(["promptlens", "rules"]).unwrap();
        assert!(cli.command.no_delay());
    }
}
