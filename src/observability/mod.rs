//! Observability for `recipedoc`.
//!
//! Structured logging to stderr via `tracing`.

pub mod logging;

pub use logging::{LogFormat, init_logging, verbosity_to_directive};
