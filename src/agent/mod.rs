//! Agent seam.
//!
//! The agent is an external collaborator: this module defines the vocabulary
//! types it consumes, the trait both HTTP surfaces call through, and the
//! error type they translate.

pub mod placeholder;

pub use placeholder::PlaceholderAgent;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One turn of conversation. Ordering in a sequence is conversation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Normalized parameters for one agent call, produced by the A2A method
/// dispatcher. Unrecognized methods dispatch with everything unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchParams {
    pub messages: Vec<Message>,
    pub context_id: Option<String>,
    pub task_id: Option<String>,
    pub config: Option<Value>,
}

/// Errors surfaced by an agent implementation.
#[derive(Debug, Error)]
pub enum AgentError {
    /// No usable agent is wired in.
    #[error("Agent unavailable: {0}")]
    Unavailable(String),

    /// The agent failed while producing a response.
    #[error("Agent execution failed: {0}")]
    Execution(String),
}

/// Plain-500 fallback for the question/answer surface. The A2A gateway
/// never renders this; it wraps agent faults in a JSON-RPC error envelope.
impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;

/// The external agent capability, invoked as a black box.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Short implementation name, for startup logging.
    fn name(&self) -> &str;

    /// Answer one question given prior conversation history.
    async fn run(&self, question: &str, history: &[Message]) -> Result<String>;

    /// Process a normalized message batch from the A2A gateway. The returned
    /// payload lands verbatim in the JSON-RPC `result` field.
    async fn process_messages(&self, params: DispatchParams) -> Result<Value>;
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Canned agent for tests: records the last dispatch and returns a
    /// fixed payload or a fixed failure.
    pub struct CannedAgent {
        reply: std::result::Result<Value, String>,
        seen: Mutex<Option<DispatchParams>>,
    }

    impl CannedAgent {
        pub fn replying(value: Value) -> Self {
            Self {
                reply: Ok(value),
                seen: Mutex::new(None),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                seen: Mutex::new(None),
            }
        }

        /// The parameters of the most recent `process_messages` call.
        pub fn last_dispatch(&self) -> Option<DispatchParams> {
            self.seen.lock().expect("lock poisoned").clone()
        }
    }

    #[async_trait]
    impl Agent for CannedAgent {
        fn name(&self) -> &str {
            "canned"
        }

        async fn run(&self, _question: &str, _history: &[Message]) -> Result<String> {
            match &self.reply {
                Ok(value) => Ok(value.as_str().unwrap_or_default().to_string()),
                Err(message) => Err(AgentError::Execution(message.clone())),
            }
        }

        async fn process_messages(&self, params: DispatchParams) -> Result<Value> {
            *self.seen.lock().expect("lock poisoned") = Some(params);
            match &self.reply {
                Ok(value) => Ok(value.clone()),
                Err(message) => Err(AgentError::Execution(message.clone())),
            }
        }
    }
}
