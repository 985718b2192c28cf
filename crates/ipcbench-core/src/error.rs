//! Error taxonomy for the benchmark core.

use std::io;

use thiserror::Error;

use ipcbench_protocol::ProtocolError;

/// Result type for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;

/// A classified transport failure.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The endpoint is not there: address missing, connection refused or
    /// reset, broken pipe, or a timed-out operation. An expected
    /// operational condition, reported as "service unavailable" upstream.
    #[error("IPC endpoint unavailable: {detail}")]
    Unavailable { detail: String },

    /// Any other transport failure, carries the raw message.
    #[error("unexpected transport error: {detail}")]
    Unexpected { detail: String },
}

impl ConnectionError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// The raw detail string, without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Unavailable { detail } | Self::Unexpected { detail } => detail,
        }
    }
}

/// Errors produced by a benchmark run.
///
/// None of these are retried; each propagates to the caller as a typed
/// failure with a human-readable message.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Bad iteration input. Raised before any connection is attempted.
    #[error("{0}")]
    Validation(String),

    /// Transport failure during connect, send, or receive.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// The endpoint returned a malformed or truncated frame.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Maps a transport error onto the Unavailable/Unexpected taxonomy.
///
/// Pure function over the error's kind and message so classification is
/// testable without opening sockets.
pub fn classify_io_error(err: &io::Error) -> ConnectionError {
    let detail = err.to_string();
    match err.kind() {
        io::ErrorKind::NotFound
        | io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::TimedOut => ConnectionError::Unavailable { detail },
        _ => ConnectionError::Unexpected { detail },
    }
}

/// Classification for an elapsed `tokio::time::timeout` on a socket
/// operation. Timeouts are part of the Unavailable set.
pub fn timed_out(operation: &str) -> ConnectionError {
    ConnectionError::Unavailable {
        detail: format!("{operation} timed out"),
    }
}
