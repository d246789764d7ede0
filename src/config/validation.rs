//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Returns all validation errors, not just the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{EchoConfig, ListenerConfig, RelayConfig, UpstreamConfig};

/// A single semantic problem in a config.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("upstream.base_url '{0}' is not an absolute http(s) URL")]
    UpstreamUrl(String),

    #[error("upstream.timeout_millis must be greater than zero")]
    ZeroTimeout,

    #[error("listener.request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Configs that can be semantically validated after parsing.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

fn check_listener(listener: &ListenerConfig, errors: &mut Vec<ValidationError>) {
    if listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(listener.bind_address.clone()));
    }
    if listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
}

fn check_upstream(upstream: &UpstreamConfig, errors: &mut Vec<ValidationError>) {
    match Url::parse(&upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::UpstreamUrl(upstream.base_url.clone())),
    }
    if upstream.timeout_millis == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_listener(&self.listener, &mut errors);
        check_upstream(&self.upstream, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for EchoConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_listener(&self.listener, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configs_are_valid() {
        assert!(RelayConfig::default().validate().is_ok());
        assert!(EchoConfig::default().validate().is_ok());
    }

    #[test]
    fn all_errors_reported_together() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.upstream.base_url = "ftp://example.com".into();
        config.upstream.timeout_millis = 0;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_relative_upstream_url() {
        let mut config = RelayConfig::default();
        config.upstream.base_url = "/echo".into();
        assert!(config.validate().is_err());
    }
}
