//! Protocol error types.

use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while decoding a response frame.
///
/// Either variant indicates an endpoint-side bug or a protocol mismatch;
/// neither is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The stream ended before a complete header or payload arrived.
    #[error("short read: expected {expected} bytes, got {received}")]
    ShortRead { expected: usize, received: usize },

    /// The echoed payload does not match the value that was sent.
    #[error("echo mismatch: sent {sent}, received {received}")]
    Mismatch { sent: u64, received: u64 },
}
