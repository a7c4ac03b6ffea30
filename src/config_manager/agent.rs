use serde::{Deserialize, Serialize};

pub const DEFAULT_AGENT_NAME: &str = "hobby-engagement-agent";

/// Identity reported in every response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_agent_name")]
    pub agent_name: String,
}

fn default_agent_name() -> String {
    DEFAULT_AGENT_NAME.to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_name: default_agent_name(),
        }
    }
}
