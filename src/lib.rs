//! Echo relay: a two-service HTTP demonstration.
//!
//! The `echo` service returns its input unchanged; the relay validates an
//! inbound request, forwards it upstream with a fixed deadline, and maps the
//! outcome onto an HTTP response.

pub mod config;
pub mod echo;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::{EchoConfig, RelayConfig};
pub use echo::EchoServer;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
