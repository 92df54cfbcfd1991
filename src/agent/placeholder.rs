//! Placeholder Agent
//!
//! A stub agent used when no real agent implementation is wired in.
//! Lets the server start and answer the liveness probe.

use async_trait::async_trait;
use serde_json::Value;

use crate::agent::{Agent, AgentError, DispatchParams, Message, Result};

const NOT_WIRED: &str = "No agent wired in. Link a real Agent implementation at startup.";

/// An agent that fails every call with an "agent not wired" error.
pub struct PlaceholderAgent;

#[async_trait]
impl Agent for PlaceholderAgent {
    fn name(&self) -> &str {
        "none"
    }

    async fn run(&self, _question: &str, _history: &[Message]) -> Result<String> {
        Err(AgentError::Unavailable(NOT_WIRED.to_string()))
    }

    async fn process_messages(&self, _params: DispatchParams) -> Result<Value> {
        Err(AgentError::Unavailable(NOT_WIRED.to_string()))
    }
}
