//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the concrete upstream client is
//! instantiated and wired into the gateway service.

use std::sync::Arc;

use anyhow::Result;
use llmgate_core::{GatewayService, Settings};
use llmgate_openai::{DefaultOpenAiClient, OpenAiClientConfig};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    /// Create config with default bind address and permissive CORS.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
        }
    }

    /// Set the bind address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Gateway service every model endpoint delegates to.
    pub gateway: GatewayService,
}

impl AxumContext {
    /// Wrap an already-built gateway service.
    pub fn new(gateway: GatewayService) -> Self {
        Self { gateway }
    }
}

/// Wire the OpenAI client into a gateway service.
pub fn bootstrap(settings: Settings) -> Result<AxumContext> {
    if !settings.has_api_key() {
        warn!("OPENAI_API_KEY is not set; model endpoints will answer 500");
    }

    let client = DefaultOpenAiClient::new(&OpenAiClientConfig::from_settings(&settings))?;
    let gateway = GatewayService::new(Arc::new(settings), Arc::new(client));
    Ok(AxumContext::new(gateway))
}

/// Start the web server and run until Ctrl-C.
pub async fn start_server(config: ServerConfig, settings: Settings) -> Result<()> {
    let ctx = bootstrap(settings)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("llmgate listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("llmgate shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
}
