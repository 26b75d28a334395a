//! `llmgate` binary: load configuration and serve the HTTP API.

use clap::Parser;
use llmgate_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};
use llmgate_axum::{ServerConfig, start_server};
use llmgate_core::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// HTTP facade for OpenAI chat completions, embeddings and responses.
#[derive(Debug, Parser)]
#[command(name = "llmgate", version, about)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "LLMGATE_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind.
    #[arg(long, env = "LLMGATE_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Allowed CORS origins (comma separated). All origins when empty.
    #[arg(long = "allow-origin", env = "LLMGATE_ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        settings = ?settings,
        "Starting llmgate"
    );

    let mut config = ServerConfig::with_defaults()
        .with_host(cli.host)
        .with_port(cli.port);
    if !cli.allowed_origins.is_empty() {
        config = config.with_allowed_origins(cli.allowed_origins);
    }

    start_server(config, settings).await
}
