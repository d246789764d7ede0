//! Lifecycle management.
//!
//! Startup order: config → logging → bind → serve.
//! Shutdown order: signal → stop accepting → drain in-flight → exit.

pub mod shutdown;

pub use shutdown::Shutdown;
