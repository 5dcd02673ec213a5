//! did:andorra Universal Resolver Driver
//!
//! Validates `did:andorra` identifiers and resolves them against the
//! DefinitiveID registry behind the `/1.0/identifiers/{did}` endpoint.

mod config;
mod error;
mod server;
mod types;

use crate::config::Config;
use crate::error::Result;
use crate::server::{start_server, ServerState, SharedState};
use definitiveid_client::{ClientConfig, RegistryClient};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env()
        .add_directive("did_andorra_driver=info".parse()?)
        .add_directive("definitiveid_client=info".parse()?);

    // Use JSON format for Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting did:andorra Universal Resolver Driver...");

    let config = Config::from_env()?;
    info!("Port: {}", config.port);
    info!("Registry: {}", config.base_url);
    info!("Upstream timeout: {} seconds", config.upstream_timeout.as_secs());

    let client = RegistryClient::with_config(ClientConfig {
        base_url: config.base_url,
        timeout: config.upstream_timeout,
        user_agent: config.user_agent,
    })?;

    let state: SharedState = Arc::new(ServerState::new(client));

    // Runs until SIGINT or SIGTERM
    start_server(state, config.port).await?;

    info!("Shutdown complete");
    Ok(())
}
