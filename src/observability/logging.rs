//! Structured logging.
//!
//! Each binary constructs its own subscriber at startup; nothing else in
//! the system holds mutable logging state.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber for one service process.
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies to
/// this crate and to tower_http.
pub fn init(service: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("echo_relay={level},tower_http={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(service, "logging initialized");
}
