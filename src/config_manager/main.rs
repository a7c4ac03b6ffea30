use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config_manager::agent::AgentConfig;
use crate::config_manager::stateless_llm::LlmConfig;
use crate::config_manager::system::SystemConfig;

/// Main configuration for the application. Every section is optional in
/// the file; missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(default)]
    pub llm_config: LlmConfig,

    #[serde(default)]
    pub agent_config: AgentConfig,
}

impl Config {
    /// Load configuration from a JSON or YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_config_file, validate_config};
        let value = read_config_file(path)?;
        validate_config(value)
    }

    /// Candidate config locations, in priority order
    pub fn candidate_paths() -> Vec<PathBuf> {
        vec![
            std::env::var("CONFIG_PATH").ok().map(PathBuf::from),
            Some(PathBuf::from("conf.json")),
            Some(PathBuf::from("conf.yaml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first existing candidate, or the built-in defaults when none
    /// exists. A candidate that exists but fails to parse is an error.
    pub fn discover(candidates: &[PathBuf]) -> anyhow::Result<(Self, Option<PathBuf>)> {
        for path in candidates {
            if !path.exists() {
                debug!("No config at {}", path.display());
                continue;
            }
            let config = Self::load(path)?;
            return Ok((config, Some(path.clone())));
        }
        Ok((Self::default(), None))
    }

    /// Apply environment overrides and secrets. Called once at start-up.
    pub fn finalize(mut self) -> Self {
        self.system_config.apply_env_overrides();
        self.llm_config.resolve_api_key();
        self
    }
}
