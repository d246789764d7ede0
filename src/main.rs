//! Relay (forwarding) service binary.
//!
//! Validates an inbound message, forwards it to the echo service with a
//! fixed deadline, and maps the outcome onto an HTTP response.

use std::path::PathBuf;

use clap::Parser;
use echo_relay::config::{load_config, RelayConfig};
use echo_relay::http::RelayServer;
use echo_relay::lifecycle::Shutdown;
use echo_relay::observability::logging;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "echo-relay")]
#[command(about = "Forwarding service for the echo demo", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config::<RelayConfig>(path)?,
        None => RelayConfig::default(),
    };

    logging::init("echo-relay", &config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_base_url = %config.upstream.base_url,
        timeout_millis = config.upstream.timeout_millis,
        "configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = RelayServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
