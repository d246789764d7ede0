//! Outcome classification for forwarded requests.
//!
//! Maps the result of one outbound call onto exactly one terminal response.
//! The mapping is a total function of the outcome's kind.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::echo::EchoResponse;

/// `error` field of every upstream-failure response body. Kept stable;
/// downstream consumers match on it.
pub const UPSTREAM_UNAVAILABLE: &str = "Service A unavailable";

/// `error` field of the invalid-request response body.
pub const MISSING_MSG: &str = "Missing 'msg' parameter";

/// Failure kind of one outbound call.
///
/// The Display impl of each variant is the `details` string surfaced to the
/// client.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No response within the configured deadline.
    #[error("Timeout: no response from {url} within {timeout_millis}ms")]
    Timeout { url: String, timeout_millis: u64 },

    /// The TCP connection could not be established.
    #[error("Connection error: {message}")]
    Connect { message: String },

    /// Any other transport or decoding failure.
    #[error("Request error: {message}")]
    Other { message: String },
}

impl UpstreamError {
    pub(crate) fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Terminal result of handling one `/call-echo` request.
///
/// Exactly one variant is produced per request; the variant fully determines
/// the status code and body. Constructed and consumed within a single
/// request, never shared.
#[derive(Debug)]
pub enum ForwardResult {
    Success { message: String, echo: EchoResponse },
    InvalidRequest { details: String },
    UpstreamTimeout { details: String },
    UpstreamUnavailable { details: String },
}

impl ForwardResult {
    /// Fold an outbound call's outcome into a terminal result.
    pub fn classify(message: String, outcome: Result<EchoResponse, UpstreamError>) -> Self {
        match outcome {
            Ok(echo) => Self::Success { message, echo },
            Err(error @ UpstreamError::Timeout { .. }) => Self::UpstreamTimeout {
                details: error.to_string(),
            },
            Err(error) => Self::UpstreamUnavailable {
                details: error.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success { .. } => StatusCode::OK,
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::UpstreamTimeout { .. } | Self::UpstreamUnavailable { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

/// Success body of `/call-echo`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CallEchoBody {
    pub msg: String,
    pub echo_response: EchoResponse,
}

/// Failure body of `/call-echo`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ForwardResult {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Success { message, echo } => (
                status,
                Json(CallEchoBody {
                    msg: message,
                    echo_response: echo,
                }),
            )
                .into_response(),
            Self::InvalidRequest { details } => (
                status,
                Json(ErrorBody {
                    error: details,
                    details: None,
                }),
            )
                .into_response(),
            Self::UpstreamTimeout { details } | Self::UpstreamUnavailable { details } => (
                status,
                Json(ErrorBody {
                    error: UPSTREAM_UNAVAILABLE.to_string(),
                    details: Some(details),
                }),
            )
                .into_response(),
        }
    }
}
