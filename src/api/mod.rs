//! Plain question/answer HTTP surface.
//!
//! Serves:
//! - `POST /` — forward `{question, history}` to the agent
//! - `GET  /` — liveness probe

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::agent::{Agent, AgentError, Message};

/// Shared state for the plain API.
#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<dyn Agent>,
}

/// One inbound question with optional conversation history.
#[derive(Debug, Clone, Deserialize)]
pub struct Query {
    pub question: String,
    #[serde(default)]
    pub history: Vec<Message>,
}

/// The agent's textual answer.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    pub response: String,
}

/// Build the axum router for the plain API.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(root).post(ask_agent))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Plain API server configuration.
pub struct ApiParams {
    pub bind: String,
    pub port: u16,
}

/// Start the plain API server.
pub async fn start_server(agent: Arc<dyn Agent>, params: &ApiParams) -> anyhow::Result<()> {
    let state = ApiState { agent };
    let app = build_router(state);
    let addr: SocketAddr = format!("{}:{}", params.bind, params.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid API address: {}", e))?;

    tracing::info!("🚀 Agent API starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET / — liveness probe. Shared with the A2A gateway router.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "AI Agent API is running 🚀" }))
}

/// POST / — forward the question to the agent.
///
/// No structured error envelope here: an agent fault renders as a plain 500.
async fn ask_agent(
    State(state): State<ApiState>,
    Json(query): Json<Query>,
) -> Result<Json<AskResponse>, AgentError> {
    let result = state.agent.run(&query.question, &query.history).await?;
    Ok(Json(AskResponse { response: result }))
}
