use std::sync::Arc;

use crate::agent::{StatelessLLMFactory, StatelessLLMInterface};
use crate::config_manager::Config;

/// Shared, immutable per-process state. Cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<dyn StatelessLLMInterface>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = StatelessLLMFactory::create_llm(&config.llm_config)?;
        Ok(Self::with_llm(config, llm))
    }

    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
        }
    }

    pub fn agent_name(&self) -> &str {
        &self.config.agent_config.agent_name
    }
}
