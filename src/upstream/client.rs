//! Outbound calls to the upstream echo service.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tokio::time;
use url::Url;

use crate::config::UpstreamConfig;
use crate::echo::EchoResponse;
use crate::http::request::X_REQUEST_ID;
use crate::upstream::outcome::UpstreamError;

/// Upstream bodies larger than this are treated as malformed.
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// HTTP client for the upstream echo service.
///
/// One instance is shared by all in-flight requests; it holds no per-request
/// state. Each call makes exactly one attempt, bounded by the configured
/// deadline across connect, response, and body read.
pub struct EchoClient {
    client: Client<HttpConnector, Body>,
    base_url: Url,
    timeout: Duration,
    timeout_millis: u64,
}

impl EchoClient {
    /// Fails if the configured base URL does not parse.
    pub fn new(config: &UpstreamConfig) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(&config.base_url)?;
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Ok(Self {
            client,
            base_url,
            timeout: Duration::from_millis(config.timeout_millis),
            timeout_millis: config.timeout_millis,
        })
    }

    /// Call `GET /echo` with the given message.
    ///
    /// `request_id`, when present, is propagated as the `x-request-id`
    /// header of the outbound request.
    pub async fn echo(
        &self,
        msg: &str,
        request_id: Option<&str>,
    ) -> Result<EchoResponse, UpstreamError> {
        let url = self.echo_url(msg);
        tracing::debug!(
            url = %url,
            timeout_millis = self.timeout_millis,
            "calling upstream echo"
        );

        let outcome = match time::timeout(self.timeout, self.request(&url, request_id)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout {
                url: url.to_string(),
                timeout_millis: self.timeout_millis,
            }),
        };

        if let Err(error) = &outcome {
            tracing::error!(
                url = %url,
                timeout_millis = self.timeout_millis,
                error = %error,
                "upstream call failed"
            );
        }
        outcome
    }

    /// Build the upstream URL with a percent-encoded `msg` query, so decoded
    /// inbound values round-trip verbatim.
    fn echo_url(&self, msg: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("/echo");
        url.query_pairs_mut().clear().append_pair("msg", msg);
        url
    }

    async fn request(
        &self,
        url: &Url,
        request_id: Option<&str>,
    ) -> Result<EchoResponse, UpstreamError> {
        let uri: Uri = url
            .as_str()
            .parse()
            .map_err(|e| UpstreamError::other(format!("invalid upstream URI: {e}")))?;

        let mut builder = Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::USER_AGENT, "echo-relay");
        if let Some(id) = request_id {
            builder = builder.header(X_REQUEST_ID, id);
        }
        let request = builder
            .body(Body::empty())
            .map_err(|e| UpstreamError::other(format!("failed to build upstream request: {e}")))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(classify_client_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::other(format!(
                "unexpected status {status} from upstream"
            )));
        }

        let bytes = axum::body::to_bytes(Body::new(response.into_body()), MAX_RESPONSE_BYTES)
            .await
            .map_err(|e| UpstreamError::other(format!("failed to read upstream body: {e}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| UpstreamError::other(format!("malformed upstream body: {e}")))
    }
}

fn classify_client_error(error: hyper_util::client::legacy::Error) -> UpstreamError {
    let message = describe(&error);
    if error.is_connect() {
        UpstreamError::Connect { message }
    } else {
        UpstreamError::Other { message }
    }
}

/// Render an error with its source chain; the client's own Display omits the
/// underlying OS error.
fn describe(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
