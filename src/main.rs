//! agent-relay — HTTP front-end and A2A JSON-RPC gateway for an external agent.
//!
//! One binary, one subcommand per deployable shape:
//! - `agent-relay api`     — plain question/answer API on port 8000
//! - `agent-relay gateway` — A2A JSON-RPC gateway on `$PORT` (default 5001)

mod a2a;
mod agent;
mod api;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::agent::{Agent, PlaceholderAgent};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The plain API keeps its original fixed port.
const API_PORT: u16 = 8000;

#[derive(Parser)]
#[command(
    name = "agent-relay",
    version,
    about = "HTTP front-end and A2A JSON-RPC gateway for an external agent",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the plain question/answer API.
    Api {
        /// Address to bind.
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },
    /// Serve the A2A JSON-RPC gateway.
    Gateway {
        /// Address to bind.
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,

        /// Listening port.
        #[arg(long, env = "PORT", default_value_t = 5001)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // PlaceholderAgent until a real agent implementation is linked in.
    let agent: Arc<dyn Agent> = Arc::new(PlaceholderAgent);
    tracing::info!("agent-relay v{} (agent: {})", VERSION, agent.name());

    match cli.command {
        Command::Api { bind } => {
            let params = api::ApiParams {
                bind,
                port: API_PORT,
            };
            api::start_server(agent, &params).await
        }
        Command::Gateway { bind, port } => {
            let params = a2a::server::GatewayParams { bind, port };
            a2a::server::start_server(agent, &params).await
        }
    }
}
