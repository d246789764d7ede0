//! Request identity.
//!
//! Every inbound request gets an `x-request-id` header (UUID v4) if the
//! client did not supply one; the relay propagates it on its outbound call
//! so one user request is correlatable across both services' logs.

use axum::http::{HeaderMap, HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Read the request ID header, if present and valid UTF-8.
pub fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers.get(X_REQUEST_ID).and_then(|v| v.to_str().ok())
}

/// Tower layer that assigns a request ID to requests lacking one.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if !request.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                request.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::HeaderValue;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceExt};

    async fn extract_id(request: Request<Body>) -> Result<Option<String>, Infallible> {
        Ok(request_id(request.headers()).map(str::to_string))
    }

    #[tokio::test]
    async fn assigns_id_when_absent() {
        let service = RequestIdLayer.layer(service_fn(extract_id));
        let request = Request::builder().body(Body::empty()).unwrap();

        let id = service.oneshot(request).await.unwrap();
        let id = id.expect("request id should have been assigned");
        assert_eq!(id.len(), 36); // UUID v4 text form
    }

    #[tokio::test]
    async fn preserves_existing_id() {
        let service = RequestIdLayer.layer(service_fn(extract_id));
        let request = Request::builder()
            .header(X_REQUEST_ID, HeaderValue::from_static("abc-123"))
            .body(Body::empty())
            .unwrap();

        let id = service.oneshot(request).await.unwrap();
        assert_eq!(id.as_deref(), Some("abc-123"));
    }
}
