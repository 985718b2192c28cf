//! Benchmark orchestration.
//!
//! Validates a requested iteration count, drives one session through N
//! timed round-trips, and aggregates the average round-trip time. Each
//! run opens, uses, and closes exactly one connection; a failure at any
//! stage aborts the run whole, partial timing is never reported.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::session::IpcSession;

/// Aggregated outcome of a completed run.
///
/// Serialized as `{"iterations": N, "avg_rtt_us": X}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub iterations: u64,
    #[serde(rename = "avg_rtt_us")]
    pub avg_rtt_micros: f64,
}

/// Runs echo benchmarks against the configured endpoint.
pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    /// Creates a runner over the given configuration.
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Runs a benchmark from raw user input.
    ///
    /// Parses `iters_raw` as an integer and rejects anything outside
    /// `[1, max_iterations]` before any connection is attempted.
    pub async fn run(&self, iters_raw: &str) -> BenchResult<BenchmarkResult> {
        let iterations: u64 = iters_raw
            .trim()
            .parse()
            .map_err(|_| BenchError::Validation("Iterations must be an integer.".into()))?;
        self.run_iterations(iterations).await
    }

    /// Runs `iterations` timed round-trips and returns the average RTT.
    pub async fn run_iterations(&self, iterations: u64) -> BenchResult<BenchmarkResult> {
        if iterations < 1 || iterations > self.config.max_iterations {
            return Err(BenchError::Validation(format!(
                "Iterations must be between 1 and {}.",
                self.config.max_iterations
            )));
        }

        let mut session =
            IpcSession::open(&self.config.socket_path, self.config.bench_timeout).await?;
        debug!(iterations, "benchmark started");

        // Sequential, half-duplex loop; round-trips are never parallelized
        // so the timing reflects serialized latency.
        let start = Instant::now();
        for i in 0..iterations {
            session.roundtrip(i).await?;
        }
        let elapsed = start.elapsed();

        let avg_rtt_micros = elapsed.as_secs_f64() * 1_000_000.0 / iterations as f64;
        info!(iterations, avg_rtt_micros, "benchmark finished");

        Ok(BenchmarkResult {
            iterations,
            avg_rtt_micros,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectionError;
    use crate::testutil::spawn_echo_listener;

    use std::time::Duration;
    use tempfile::tempdir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::UnixListener;

    fn runner_for(path: &std::path::Path) -> BenchmarkRunner {
        BenchmarkRunner::new(BenchConfig::new(path).with_bench_timeout(Duration::from_secs(1)))
    }

    #[tokio::test]
    async fn rejects_non_integer_input() {
        // The socket does not exist: a connection attempt would surface as
        // Unavailable, so a Validation error proves none was made.
        let dir = tempdir().unwrap();
        let runner = runner_for(&dir.path().join("missing.sock"));

        for input in ["abc", "1.5", "", "10 20"] {
            let result = runner.run(input).await;
            assert!(
                matches!(result, Err(BenchError::Validation(ref msg)) if msg == "Iterations must be an integer."),
                "input {input:?} should fail integer validation"
            );
        }
    }

    #[tokio::test]
    async fn rejects_out_of_range_iterations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.sock");
        let runner = BenchmarkRunner::new(
            BenchConfig::new(&path)
                .with_bench_timeout(Duration::from_secs(1))
                .with_max_iterations(100),
        );

        for input in ["0", "101", "-5"] {
            let result = runner.run(input).await;
            match result {
                Err(BenchError::Validation(_)) => {}
                other => panic!("input {input:?} should fail validation, got {other:?}"),
            }
        }

        let result = runner.run_iterations(0).await;
        assert!(
            matches!(result, Err(BenchError::Validation(ref msg)) if msg == "Iterations must be between 1 and 100.")
        );
    }

    #[tokio::test]
    async fn benchmark_against_echo_endpoint() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("echo.sock");
        let _server = spawn_echo_listener(&path);

        let result = runner_for(&path).run("100").await.unwrap();
        assert_eq!(result.iterations, 100);
        assert!(result.avg_rtt_micros > 0.0);
    }

    #[tokio::test]
    async fn average_reflects_per_call_delay() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("slow.sock");

        // Echo with a fixed 2 ms delay per round-trip.
        let listener = UnixListener::bind(&path).unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            loop {
                let mut frame = [0u8; ipcbench_protocol::FRAME_LEN];
                if stream.read_exact(&mut frame).await.is_err() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(2)).await;
                if stream.write_all(&frame).await.is_err() {
                    break;
                }
            }
        });

        let result = runner_for(&path).run_iterations(5).await.unwrap();
        assert!(
            result.avg_rtt_micros >= 2_000.0,
            "average {} µs should include the simulated 2 ms delay",
            result.avg_rtt_micros
        );
    }

    #[tokio::test]
    async fn missing_endpoint_fails_unavailable() {
        let dir = tempdir().unwrap();
        let runner = runner_for(&dir.path().join("missing.sock"));

        let result = runner.run("100").await;
        assert!(matches!(
            result,
            Err(BenchError::Connection(ConnectionError::Unavailable { .. }))
        ));
    }

    #[tokio::test]
    async fn mid_loop_failure_aborts_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flaky.sock");

        // Echoes two frames, then closes the connection.
        let listener = UnixListener::bind(&path).unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            for _ in 0..2 {
                let mut frame = [0u8; ipcbench_protocol::FRAME_LEN];
                stream.read_exact(&mut frame).await.unwrap();
                stream.write_all(&frame).await.unwrap();
            }
        });

        let result = runner_for(&path).run_iterations(10).await;
        assert!(result.is_err(), "run must fail as a unit, no partial result");
    }

    #[test]
    fn result_serializes_with_original_field_names() {
        let result = BenchmarkResult {
            iterations: 1000,
            avg_rtt_micros: 12.5,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"iterations": 1000, "avg_rtt_us": 12.5})
        );
    }
}
