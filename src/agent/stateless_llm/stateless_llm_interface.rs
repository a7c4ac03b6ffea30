use async_trait::async_trait;

use super::CompletionError;
use crate::agent::input_types::Message;

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory; every call carries the full
/// conversation.
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Run one chat completion and return the first choice's text
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<String, CompletionError>;

    /// Model used when the caller has no preference
    fn default_model(&self) -> &str;
}
