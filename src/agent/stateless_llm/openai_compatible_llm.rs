use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::error::CompletionError;
use super::stateless_llm_interface::StatelessLLMInterface;
use crate::agent::input_types::Message;

/// OpenAI compatible LLM implementation
/// Talks to `{base_url}/chat/completions` directly over HTTP
pub struct OpenAICompatibleLLM {
    client: Client,
    model: String,
    base_url: String,
    api_key: String,
    temperature: Option<f32>,
}

impl OpenAICompatibleLLM {
    pub fn new(
        model: String,
        base_url: String,
        api_key: String,
        temperature: Option<f32>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!(
            "Initialized OpenAICompatibleLLM: model={}, base_url={}, timeout={:?}",
            model, base_url, timeout
        );
        Ok(Self {
            client,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            temperature,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request_body(&self, model: &str, messages: &[Message]) -> Value {
        let mut body = json!({
            "model": model,
            "messages": messages,
        });
        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }
        body
    }
}

/// Extract the first choice's text from a raw response body
fn parse_completion(body: &str) -> Result<String, CompletionError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::MalformedResponse("no choices in response".to_string()))?;
    choice
        .message
        .content
        .ok_or_else(|| CompletionError::MalformedResponse("first choice has no content".to_string()))
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<String, CompletionError> {
        if self.api_key.trim().is_empty() {
            warn!("Completion requested without an API key");
            return Err(CompletionError::MissingApiKey);
        }

        debug!(
            "Sending chat completion: model={}, messages={}",
            model,
            messages.len()
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&self.build_request_body(model, messages))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("Completion API returned {}", status);
            return Err(CompletionError::from_status(status.as_u16(), body));
        }

        let text = parse_completion(&body)?;
        debug!("Chat completion returned {} bytes", text.len());
        Ok(text)
    }

    fn default_model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use std::net::SocketAddr;

    fn llm(base_url: &str, api_key: &str) -> OpenAICompatibleLLM {
        OpenAICompatibleLLM::new(
            "gpt-4o-mini".to_string(),
            base_url.to_string(),
            api_key.to_string(),
            None,
            Some(Duration::from_secs(5)),
        )
        .unwrap()
    }

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1", addr)
    }

    #[test]
    fn test_build_request_body() {
        let client = llm("http://localhost/v1/", "k");
        let body = client.build_request_body("gpt-4o-mini", &[Message::system("sys"), Message::user("hi")]);
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
        assert!(body.get("temperature").is_none());
        assert_eq!(client.completions_url(), "http://localhost/v1/chat/completions");
    }

    #[test]
    fn test_parse_completion() {
        let text = parse_completion(r#"{"choices":[{"message":{"role":"assistant","content":"{\"intent\":\"general_advice\"}"}}]}"#).unwrap();
        assert_eq!(text, r#"{"intent":"general_advice"}"#);

        assert!(matches!(
            parse_completion(r#"{"choices":[]}"#),
            Err(CompletionError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_completion(r#"{"choices":[{"message":{"content":null}}]}"#),
            Err(CompletionError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_completion("<html>"),
            Err(CompletionError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        // Port 9 (discard) would fail with a network error if contacted.
        let client = llm("http://127.0.0.1:9/v1", "");
        let err = client.chat_completion("gpt-4o-mini", &[]).await.unwrap_err();
        assert!(matches!(err, CompletionError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_chat_completion_against_local_upstream() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(
                    headers.get("authorization").and_then(|v| v.to_str().ok()),
                    Some("Bearer sk-test")
                );
                let count = body["messages"].as_array().map(|m| m.len()).unwrap_or(0);
                Json(json!({
                    "id": "chatcmpl-1",
                    "model": body["model"],
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": format!("got {}", count)},
                        "finish_reason": "stop"
                    }]
                }))
            }),
        );
        let base_url = spawn_upstream(router).await;

        let client = llm(&base_url, "sk-test");
        let text = client
            .chat_completion("gpt-4o-mini", &[Message::system("s"), Message::user("u")])
            .await
            .unwrap();
        assert_eq!(text, "got 2");
    }

    #[tokio::test]
    async fn test_upstream_status_is_classified() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let base_url = spawn_upstream(router).await;

        let err = llm(&base_url, "sk-test")
            .chat_completion("gpt-4o-mini", &[Message::user("u")])
            .await
            .unwrap_err();
        match err {
            CompletionError::RateLimited { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_timeout_is_network_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"choices": [{"message": {"content": "too late"}}]}))
            }),
        );
        let base_url = spawn_upstream(router).await;

        let client = OpenAICompatibleLLM::new(
            "gpt-4o-mini".to_string(),
            base_url,
            "sk-test".to_string(),
            None,
            Some(Duration::from_millis(200)),
        )
        .unwrap();
        let err = client
            .chat_completion("gpt-4o-mini", &[Message::user("u")])
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Network(_)), "unexpected error: {:?}", err);
        assert!(err.to_caller_message().starts_with("OpenAI Error: request failed: "));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = llm(&format!("http://{}/v1", addr), "sk-test")
            .chat_completion("gpt-4o-mini", &[Message::user("u")])
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Network(_)));
        assert!(err.to_caller_message().starts_with("OpenAI Error: "));
    }
}
