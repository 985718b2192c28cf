//! Benchmark core configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Well-known address of the microkernel IPC endpoint.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/microkernel_ipc.sock";

/// Upper bound on requested iterations, keeps a single run's resource use
/// finite.
pub const DEFAULT_MAX_ITERATIONS: u64 = 100_000;

/// Configuration for the prober and the benchmark runner.
///
/// Passed in at construction so tests can substitute a stub socket path
/// and short timeouts; never read from ambient global state.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Path to the endpoint's Unix socket.
    pub socket_path: PathBuf,

    /// Connect timeout for health probes. Short, a probe is polled often.
    pub probe_timeout: Duration,

    /// Per-operation timeout for benchmark connect/read/write.
    pub bench_timeout: Duration,

    /// Maximum accepted iteration count for one run.
    pub max_iterations: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            probe_timeout: Duration::from_millis(500),
            bench_timeout: Duration::from_millis(5000),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl BenchConfig {
    /// Creates a configuration for the given socket path.
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            ..Default::default()
        }
    }

    /// Builder: set probe timeout.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Builder: set benchmark timeout.
    pub fn with_bench_timeout(mut self, timeout: Duration) -> Self {
        self.bench_timeout = timeout;
        self
    }

    /// Builder: set maximum iteration count.
    pub fn with_max_iterations(mut self, max: u64) -> Self {
        self.max_iterations = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.socket_path, PathBuf::from(DEFAULT_SOCKET_PATH));
        assert_eq!(config.probe_timeout, Duration::from_millis(500));
        assert_eq!(config.bench_timeout, Duration::from_millis(5000));
        assert_eq!(config.max_iterations, 100_000);
    }

    #[test]
    fn custom_config() {
        let config = BenchConfig::new("/run/test.sock")
            .with_probe_timeout(Duration::from_millis(100))
            .with_bench_timeout(Duration::from_secs(1))
            .with_max_iterations(500);

        assert_eq!(config.socket_path, PathBuf::from("/run/test.sock"));
        assert_eq!(config.probe_timeout, Duration::from_millis(100));
        assert_eq!(config.bench_timeout, Duration::from_secs(1));
        assert_eq!(config.max_iterations, 500);
    }
}
