use std::sync::Arc;
use tracing::info;
use anyhow::Result;

use crate::agent::stateless_llm::{OpenAICompatibleLLM, StatelessLLMInterface};
use crate::config_manager::LlmConfig;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// Only OpenAI-compatible chat completion providers are supported; any
    /// other provider name is a start-up error.
    pub fn create_llm(config: &LlmConfig) -> Result<Arc<dyn StatelessLLMInterface>> {
        info!("Initializing LLM: {}", config.llm_provider);

        match config.llm_provider.as_str() {
            "openai_compatible_llm" | "openai_llm" | "deepseek_llm" | "groq_llm"
            | "mistral_llm" => Ok(Arc::new(OpenAICompatibleLLM::new(
                config.model.clone(),
                config.base_url.clone(),
                config.llm_api_key.clone(),
                config.temperature,
                config.request_timeout(),
            )?)),
            _ => Err(anyhow::anyhow!("Unsupported LLM provider: {}", config.llm_provider)),
        }
    }
}
