//! Echo service binary: returns its input message unchanged.

use std::path::PathBuf;

use clap::Parser;
use echo_relay::config::{load_config, EchoConfig};
use echo_relay::echo::EchoServer;
use echo_relay::lifecycle::Shutdown;
use echo_relay::observability::logging;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "echo-server")]
#[command(about = "Leaf echo service for the echo demo", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config::<EchoConfig>(path)?,
        None => EchoConfig::default(),
    };

    logging::init("echo-server", &config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = EchoServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
