//! Echo HTTP server setup and handlers.

use std::time::Duration;

use axum::extract::Query;
use axum::middleware;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::EchoConfig;
use crate::echo::EchoResponse;
use crate::http::handlers::health;
use crate::http::middleware::access_log;
use crate::http::request::RequestIdLayer;

/// Query parameters of `/echo`.
#[derive(Debug, Deserialize)]
pub struct EchoParams {
    pub msg: Option<String>,
}

/// `GET /echo` — return the message unchanged; absent means empty string.
/// This endpoint never rejects input.
pub async fn echo(Query(params): Query<EchoParams>) -> Json<EchoResponse> {
    Json(EchoResponse {
        echo: params.msg.unwrap_or_default(),
    })
}

/// HTTP server for the echo service.
pub struct EchoServer {
    router: Router,
    config: EchoConfig,
}

impl EchoServer {
    pub fn new(config: EchoConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    fn build_router(config: &EchoConfig) -> Router {
        Router::new()
            .route("/echo", get(echo))
            .route("/health", get(health))
            .layer(middleware::from_fn(access_log))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "echo server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("echo server received shutdown signal");
            })
            .await?;

        tracing::info!("echo server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }
}
