use thiserror::Error;

/// Prefix the route layer puts in front of every completion failure
pub const ERROR_PREFIX: &str = "OpenAI Error: ";

/// Failure of a single completion call
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("no API key configured (set OPENAI_API_KEY)")]
    MissingApiKey,

    #[error("authentication failed ({status}): {body}")]
    Authentication { status: u16, body: String },

    #[error("rate limited ({status}): {body}")]
    RateLimited { status: u16, body: String },

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("request failed: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// Classify a non-2xx upstream status
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => CompletionError::Authentication { status, body },
            429 => CompletionError::RateLimited { status, body },
            _ => CompletionError::Upstream { status, body },
        }
    }

    /// Text surfaced to callers: `"OpenAI Error: {detail}"`
    pub fn to_caller_message(&self) -> String {
        format!("{}{}", ERROR_PREFIX, self)
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CompletionError::MalformedResponse(err.to_string())
        } else {
            CompletionError::Network(err.to_string())
        }
    }
}
