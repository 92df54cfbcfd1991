//! A2A gateway HTTP server powered by axum.
//!
//! Serves:
//! - `POST /a2a/dataGen` — JSON-RPC 2.0 endpoint
//! - `GET  /`            — liveness probe

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::a2a::{handler, types::JsonRpcResponse};
use crate::agent::Agent;
use crate::api;

/// Shared state for the A2A gateway.
#[derive(Clone)]
pub struct A2aState {
    pub agent: Arc<dyn Agent>,
}

/// Build the axum router for the A2A gateway.
pub fn build_router(state: A2aState) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/a2a/dataGen", post(handle_jsonrpc))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// A2A gateway server configuration.
pub struct GatewayParams {
    pub bind: String,
    pub port: u16,
}

/// Start the A2A gateway server.
pub async fn start_server(agent: Arc<dyn Agent>, params: &GatewayParams) -> anyhow::Result<()> {
    let state = A2aState { agent };
    let app = build_router(state);
    let addr: SocketAddr = format!("{}:{}", params.bind, params.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid gateway address: {}", e))?;

    tracing::info!("🚀 A2A gateway starting on http://{}", addr);
    tracing::info!("   JSON-RPC: http://{}/a2a/dataGen", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// POST /a2a/dataGen — JSON-RPC 2.0 endpoint.
///
/// Takes the raw body so parse faults follow the gateway's own error
/// contract instead of the extractor's.
async fn handle_jsonrpc(
    State(state): State<A2aState>,
    body: String,
) -> (StatusCode, Json<JsonRpcResponse>) {
    let (status, response) = handler::handle(&body, state.agent.clone()).await;
    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::testing::CannedAgent;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_state() -> A2aState {
        A2aState {
            agent: Arc::new(CannedAgent::replying(serde_json::json!("hello"))),
        }
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let app = build_router(test_state());
        let req = Request::builder().uri("/").body(Body::empty()).expect("request");

        let resp = app.oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_jsonrpc_send_message() {
        let app = build_router(test_state());
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "message/send",
            "params": {
                "message": { "role": "user", "content": "Hello from A2A test!" }
            },
            "id": 1
        });

        let req = Request::builder()
            .method("POST")
            .uri("/a2a/dataGen")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).expect("json")))
            .expect("request");

        let resp = app.oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_jsonrpc_rejects_bad_envelope() {
        let app = build_router(test_state());
        let body = serde_json::json!({ "method": "execute", "params": {}, "id": 1 });

        let req = Request::builder()
            .method("POST")
            .uri("/a2a/dataGen")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).expect("json")))
            .expect("request");

        let resp = app.oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
