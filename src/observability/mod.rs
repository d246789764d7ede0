//! Observability subsystem.
//!
//! Structured logging only. Failure logs carry enough context to
//! reconstruct the event: target URL, configured timeout, underlying error.

pub mod logging;
