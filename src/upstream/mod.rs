//! Outbound-call subsystem.
//!
//! # Data Flow
//! ```text
//! /call-echo handler
//!     → client.rs (one bounded-time GET /echo against the upstream)
//!     → outcome.rs (classify success / timeout / connect / other,
//!                   render the HTTP response)
//! ```
//!
//! # Design Decisions
//! - One outbound attempt per inbound request, no retries
//! - Timeout and connection failure are distinguished by error kind,
//!   never by elapsed time
//! - All upstream failures surface as 503 with a distinguishing detail

pub mod client;
pub mod outcome;

pub use client::EchoClient;
pub use outcome::{ForwardResult, UpstreamError};
