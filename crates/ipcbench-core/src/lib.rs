//! Benchmark execution and connection-health core.
//!
//! This crate owns the parts with real contracts: the one-connection
//! session client over the endpoint's Unix socket, the health prober,
//! the validated and timed benchmark loop, and the transport-error
//! classification the control surface reports from.

pub mod bench;
pub mod config;
pub mod error;
pub mod probe;
pub mod session;
pub mod tracing;

#[cfg(test)]
pub(crate) mod testutil;

pub use bench::{BenchmarkResult, BenchmarkRunner};
pub use config::{BenchConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_SOCKET_PATH};
pub use error::{BenchError, BenchResult, ConnectionError, classify_io_error};
pub use probe::{HealthProber, HealthStatus, UNAVAILABLE_MESSAGE};
pub use session::IpcSession;
pub use tracing::{TracingConfig, TracingError, init_tracing};
