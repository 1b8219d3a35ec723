mod analytics;
mod config;
mod exa;
mod http;
mod llm;
mod news;
mod text;
mod tools;
mod weather;

pub const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"), " (news analysis)");

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use tools::Newsdesk;
use tracing::info;

use exa::ExaClient;
use llm::OpenAiClient;
use news::NewsAnalyzer;

#[derive(Parser)]
#[command(name = "newsdesk", version, about = "News analysis over HTTP and MCP")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the JSON news analysis endpoint
    Serve {
        /// Address to listen on
        #[arg(long, env = "NEWSDESK_ADDR", default_value = "0.0.0.0:8000")]
        addr: SocketAddr,
    },
    /// Run the MCP tool server on stdio
    Mcp,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("newsdesk=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let http = config::http_client()?;

    match cli.command {
        Command::Serve { addr } => {
            let search = ExaClient::from_env(http.clone())
                .inspect_err(|e| tracing::error!("cannot start HTTP server: {e}"))?;
            let model = OpenAiClient::from_env(http)
                .inspect_err(|e| tracing::error!("cannot start HTTP server: {e}"))?;
            info!(model = model.model(), "starting newsdesk HTTP server");

            http::serve(addr, NewsAnalyzer::new(search, model)).await?;
        }
        Command::Mcp => {
            info!("starting newsdesk MCP server");

            let service = Newsdesk::new(http)
                .serve(stdio())
                .await
                .inspect_err(|e| tracing::error!("failed to start server: {e}"))?;

            service.waiting().await?;
        }
    }

    info!("server stopped");
    Ok(())
}
