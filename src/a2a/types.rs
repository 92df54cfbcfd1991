//! JSON-RPC 2.0 wire types for the A2A gateway.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::agent::{DispatchParams, Message};

/// JSON-RPC 2.0 error codes used by the gateway.
pub mod error_codes {
    /// Malformed request envelope.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Any fault past envelope validation, agent faults included.
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// JSON-RPC 2.0 response envelope, success or error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Success envelope: the agent's payload goes into `result` verbatim.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Error envelope without detail data.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Error envelope carrying the fault string under `data.details`.
    pub fn error_with_details(
        id: Value,
        code: i32,
        message: impl Into<String>,
        details: String,
    ) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: Some(serde_json::json!({ "details": details })),
            }),
        }
    }
}

/// `message/send` params: one message plus optional configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageParams {
    pub message: Message,
    #[serde(default)]
    pub configuration: Option<Value>,
}

/// `execute` params: a message batch plus optional identifiers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteParams {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub context_id: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
}

/// One JSON-RPC method's view of a request: a tagged union over `method`,
/// one params shape per variant.
#[derive(Debug, Clone)]
pub enum AgentCall {
    /// `message/send`
    SendMessage(SendMessageParams),
    /// `execute`
    Execute(ExecuteParams),
    /// Any other method. Dispatches with every parameter unset.
    Unknown,
}

impl AgentCall {
    /// Deserialize the params shape selected by `method`. Unrecognized
    /// methods are not an error here.
    pub fn parse(method: &str, params: Value) -> Result<Self, serde_json::Error> {
        match method {
            "message/send" => Ok(Self::SendMessage(serde_json::from_value(params)?)),
            "execute" => Ok(Self::Execute(serde_json::from_value(params)?)),
            _ => Ok(Self::Unknown),
        }
    }

    /// Normalize into the agent-call parameter set.
    pub fn into_dispatch(self) -> DispatchParams {
        match self {
            Self::SendMessage(p) => DispatchParams {
                messages: vec![p.message],
                config: p.configuration,
                ..DispatchParams::default()
            },
            Self::Execute(p) => DispatchParams {
                messages: p.messages,
                context_id: p.context_id,
                task_id: p.task_id,
                ..DispatchParams::default()
            },
            Self::Unknown => DispatchParams::default(),
        }
    }
}
