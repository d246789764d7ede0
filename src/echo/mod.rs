//! Echo service subsystem: a leaf HTTP service returning its input
//! unchanged.

pub mod server;

use serde::{Deserialize, Serialize};

pub use server::EchoServer;

/// Wire type of the echo operation. `echo` equals the request's `msg`
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoResponse {
    pub echo: String,
}
