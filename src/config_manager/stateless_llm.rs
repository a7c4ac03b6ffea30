use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Configuration for the OpenAI-compatible completion provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Empty means "read `OPENAI_API_KEY` at start-up"
    #[serde(default)]
    pub llm_api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub temperature: Option<f32>,

    /// Unset leaves the outbound call unbounded
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_llm_provider() -> String {
    "openai_llm".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl LlmConfig {
    /// Fill an empty API key from the environment. A still-empty key is not
    /// an error here; the completion client reports it per call.
    pub fn resolve_api_key(&mut self) {
        self.resolve_api_key_from(std::env::var(API_KEY_ENV).ok());
    }

    fn resolve_api_key_from(&mut self, env_key: Option<String>) {
        let key = self.llm_api_key.trim();
        // An unset `${VAR}` survives substitution verbatim.
        if key.is_empty() || key.starts_with("${") {
            self.llm_api_key = env_key.unwrap_or_default();
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_llm_provider(),
            base_url: default_base_url(),
            llm_api_key: String::new(),
            model: default_model(),
            temperature: None,
            request_timeout_secs: None,
        }
    }
}
