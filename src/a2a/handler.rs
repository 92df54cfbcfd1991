//! JSON-RPC 2.0 request pipeline for the A2A gateway.
//!
//! Per request: parse body → validate envelope → dispatch on `method` →
//! await the agent → wrap in a response envelope. Envelope faults report
//! `-32600`/400 before dispatch; every later fault is caught here and
//! reported `-32603`/500 with the fault string under `data.details`.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::a2a::types::{AgentCall, JsonRpcResponse, error_codes};
use crate::agent::{Agent, AgentError};

/// Faults past envelope validation. Params-shape faults and agent faults
/// stay distinct here but map to the same `-32603` envelope.
#[derive(Debug, Error)]
enum HandlerError {
    #[error("Invalid params: {0}")]
    Params(#[from] serde_json::Error),
    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Run one raw request body through the gateway contract.
pub async fn handle(raw: &str, agent: Arc<dyn Agent>) -> (StatusCode, JsonRpcResponse) {
    let body: Value = match serde_json::from_str(raw) {
        Ok(body) => body,
        Err(err) => {
            // Body never parsed, so there is no id to echo.
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                internal_error(Value::Null, &HandlerError::Params(err)),
            );
        }
    };

    if let Err(response) = validate_envelope(&body) {
        return (StatusCode::BAD_REQUEST, response);
    }

    let id = echoed_id(&body);
    match process(&body, agent).await {
        Ok(result) => (StatusCode::OK, JsonRpcResponse::success(id, result)),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, internal_error(id, &err)),
    }
}

/// Reject the envelope unless `jsonrpc` is the literal `"2.0"` and `id` is
/// present. An explicit `"id": null` counts as present.
fn validate_envelope(body: &Value) -> Result<(), JsonRpcResponse> {
    let version_ok = body.get("jsonrpc").and_then(Value::as_str) == Some("2.0");
    if !version_ok || body.get("id").is_none() {
        return Err(JsonRpcResponse::error(
            echoed_id(body),
            error_codes::INVALID_REQUEST,
            "Invalid Request: jsonrpc must be '2.0' and id is required",
        ));
    }
    Ok(())
}

/// The request id if the body carried one, else `null`.
fn echoed_id(body: &Value) -> Value {
    body.get("id").cloned().unwrap_or(Value::Null)
}

async fn process(body: &Value, agent: Arc<dyn Agent>) -> Result<Value, HandlerError> {
    let method = body.get("method").and_then(Value::as_str).unwrap_or_default();
    let params = body
        .get("params")
        .cloned()
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

    let dispatch = AgentCall::parse(method, params)?.into_dispatch();
    tracing::debug!(
        method,
        messages = dispatch.messages.len(),
        context_id = ?dispatch.context_id,
        task_id = ?dispatch.task_id,
        config = dispatch.config.is_some(),
        "dispatching to agent"
    );

    Ok(agent.process_messages(dispatch).await?)
}

fn internal_error(id: Value, err: &HandlerError) -> JsonRpcResponse {
    JsonRpcResponse::error_with_details(
        id,
        error_codes::INTERNAL_ERROR,
        "Internal error",
        err.to_string(),
    )
}
