use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome reported in the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Uniform response envelope returned by every route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub agent_name: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AgentResponse {
    /// Successful envelope with a single `data` entry
    pub fn success(agent_name: &str, key: &str, value: impl Into<Value>) -> Self {
        let mut data = Map::new();
        data.insert(key.to_string(), value.into());
        Self {
            agent_name: agent_name.to_string(),
            status: Status::Success,
            data: Some(data),
            error_message: None,
        }
    }

    /// Error envelope without any payload
    pub fn error(agent_name: &str, message: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.to_string(),
            status: Status::Error,
            data: None,
            error_message: Some(message.into()),
        }
    }

    /// Error envelope that also echoes the message under `key`, for callers
    /// that inspect the payload text rather than `status`.
    pub fn error_with_echo(agent_name: &str, key: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut data = Map::new();
        data.insert(key.to_string(), Value::String(message.clone()));
        Self {
            agent_name: agent_name.to_string(),
            status: Status::Error,
            data: Some(data),
            error_message: Some(message),
        }
    }
}
