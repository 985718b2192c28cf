//! Connection health probing.
//!
//! A probe answers "is the endpoint accepting connections?" by opening a
//! short-lived connection and dropping it immediately, without exchanging
//! any benchmark frames.

use serde::Serialize;
use tracing::debug;

use crate::config::BenchConfig;
use crate::error::ConnectionError;
use crate::session::IpcSession;

/// Stable user-facing message for an endpoint that is not accepting
/// connections. Raw transport detail is logged, not reported.
pub const UNAVAILABLE_MESSAGE: &str = "IPC socket unavailable.";

/// Result of a health probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    fn connected() -> Self {
        Self {
            connected: true,
            error: None,
        }
    }

    fn disconnected(error: impl Into<String>) -> Self {
        Self {
            connected: false,
            error: Some(error.into()),
        }
    }
}

/// Probes endpoint reachability with a short connect timeout.
pub struct HealthProber {
    config: BenchConfig,
}

impl HealthProber {
    /// Creates a prober over the given configuration.
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Checks whether the endpoint currently accepts connections.
    ///
    /// Never fails: this is polled repeatedly by the control surface, so
    /// every outcome is folded into a [`HealthStatus`] value.
    pub async fn probe(&self) -> HealthStatus {
        match IpcSession::open(&self.config.socket_path, self.config.probe_timeout).await {
            Ok(session) => {
                // Connectivity is all we wanted; close right away.
                drop(session);
                HealthStatus::connected()
            }
            Err(err @ ConnectionError::Unavailable { .. }) => {
                debug!(error = %err, "probe failed");
                HealthStatus::disconnected(UNAVAILABLE_MESSAGE)
            }
            Err(ConnectionError::Unexpected { detail }) => HealthStatus::disconnected(detail),
        }
    }
}
