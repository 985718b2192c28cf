//! ipcbench entry point: serves the bench control plane over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info};

use ipcbench_core::{BenchConfig, TracingConfig, init_tracing};

#[derive(Debug, Parser)]
#[command(name = "ipcbench", about = "Web control plane for the microkernel IPC bench")]
struct Cli {
    /// Address to serve HTTP on.
    #[arg(long, default_value = "0.0.0.0:8000")]
    listen: SocketAddr,

    /// Path to the IPC endpoint's Unix socket.
    #[arg(long, default_value = ipcbench_core::DEFAULT_SOCKET_PATH)]
    socket: PathBuf,

    /// Connect timeout for health probes, in milliseconds.
    #[arg(long, default_value_t = 500)]
    probe_timeout_ms: u64,

    /// Per-operation timeout for benchmark runs, in milliseconds.
    #[arg(long, default_value_t = 5000)]
    bench_timeout_ms: u64,

    /// Maximum iterations accepted for one run.
    #[arg(long, default_value_t = ipcbench_core::DEFAULT_MAX_ITERATIONS)]
    max_iterations: u64,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    if let Err(e) = init_tracing(
        TracingConfig::default()
            .with_level(level)
            .with_json_output(cli.json_logs),
    ) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    match serve(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(cli: Cli) -> Result<(), std::io::Error> {
    let config = BenchConfig::new(cli.socket)
        .with_probe_timeout(Duration::from_millis(cli.probe_timeout_ms))
        .with_bench_timeout(Duration::from_millis(cli.bench_timeout_ms))
        .with_max_iterations(cli.max_iterations);

    info!(
        listen = %cli.listen,
        socket = %config.socket_path.display(),
        "bench control plane listening"
    );

    let app = ipcbench_web::router(config);
    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    axum::serve(listener, app).await
}
