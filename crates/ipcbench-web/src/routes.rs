//! Router and request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use ipcbench_core::{BenchConfig, BenchError, BenchmarkRunner, HealthProber, HealthStatus};

use crate::page::INDEX_HTML;

/// Shared handler state. The prober and runner are stateless beyond
/// their configuration, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    prober: Arc<HealthProber>,
    runner: Arc<BenchmarkRunner>,
}

impl AppState {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            prober: Arc::new(HealthProber::new(config.clone())),
            runner: Arc::new(BenchmarkRunner::new(config)),
        }
    }
}

/// Builds the application router over the given configuration.
pub fn router(config: BenchConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/status", get(status))
        .route("/run", get(run))
        .with_state(AppState::new(config))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Always answers 200; reachability lives in the body.
async fn status(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.prober.probe().await)
}

#[derive(Debug, Deserialize)]
struct RunParams {
    iters: Option<String>,
}

/// Error body returned for every failed `/run`. Never a stack trace.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

async fn run(State(state): State<AppState>, Query(params): Query<RunParams>) -> Response {
    let iters = params.iters.as_deref().unwrap_or("1000");
    match state.runner.run(iters).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            warn!(error = %err, "benchmark run failed");
            error_response(&err).into_response()
        }
    }
}

/// Maps the core taxonomy onto HTTP statuses: caller mistakes are 400,
/// an endpoint that is not there is 503, everything else is 500.
fn error_response(err: &BenchError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        BenchError::Validation(_) => StatusCode::BAD_REQUEST,
        BenchError::Connection(conn) if conn.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
        BenchError::Connection(_) | BenchError::Protocol(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}
