//! Relay request handlers.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::upstream::outcome::MISSING_MSG;
use crate::upstream::ForwardResult;

/// Query parameters of `/call-echo`.
#[derive(Debug, Deserialize)]
pub struct CallEchoParams {
    pub msg: Option<String>,
}

/// `GET /call-echo` — validate, forward once, classify the outcome.
pub async fn call_echo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CallEchoParams>,
) -> impl IntoResponse {
    // Absent and empty are rejected alike, preserving the upstream's
    // missing/empty equivalence.
    let message = match params.msg {
        Some(msg) if !msg.is_empty() => msg,
        _ => {
            tracing::warn!("rejected request without 'msg'");
            return ForwardResult::InvalidRequest {
                details: MISSING_MSG.to_string(),
            };
        }
    };

    let outcome = state.upstream.echo(&message, request_id(&headers)).await;
    ForwardResult::classify(message, outcome)
}

/// `GET /health` — static liveness probe; never contacts the upstream.
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
