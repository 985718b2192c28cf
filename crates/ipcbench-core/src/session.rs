//! One-shot IPC session client.
//!
//! A session owns a single connected Unix stream to the endpoint and
//! performs strictly half-duplex round-trips: one request frame written,
//! one response frame read, no pipelining. Sessions are never reused
//! across runs; dropping the session closes the socket on every exit
//! path.

use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::debug;

use ipcbench_protocol::{HEADER_LEN, PAYLOAD_LEN, ProtocolError, decode_response, encode_request};

use crate::error::{BenchResult, ConnectionError, classify_io_error, timed_out};

/// A connected session to the IPC endpoint.
pub struct IpcSession {
    stream: UnixStream,
    timeout: Duration,
}

impl IpcSession {
    /// Connects to the endpoint at `path`.
    ///
    /// The connect attempt is bounded by `timeout`; the same timeout
    /// bounds every later read and write on the session.
    pub async fn open(path: &Path, timeout: Duration) -> Result<Self, ConnectionError> {
        let stream = tokio::time::timeout(timeout, UnixStream::connect(path))
            .await
            .map_err(|_| timed_out("connect"))?
            .map_err(|e| classify_io_error(&e))?;

        debug!(path = %path.display(), "session opened");
        Ok(Self { stream, timeout })
    }

    /// Performs one echo round-trip carrying `value`.
    ///
    /// Writes the full request frame, reads the 16-byte response header
    /// and the 8-byte payload, and verifies the echoed value. A stream
    /// that ends mid-frame yields `ProtocolError::ShortRead`; transport
    /// failures are classified through [`classify_io_error`].
    pub async fn roundtrip(&mut self, value: u64) -> BenchResult<u64> {
        let frame = encode_request(value);
        tokio::time::timeout(self.timeout, self.stream.write_all(&frame))
            .await
            .map_err(|_| timed_out("send request"))?
            .map_err(|e| classify_io_error(&e))?;

        let mut header = [0u8; HEADER_LEN];
        let header_len = self.read_full(&mut header).await?;

        let mut payload = [0u8; PAYLOAD_LEN];
        let payload_len = self.read_full(&mut payload).await?;

        let echoed = decode_response(&header[..header_len], &payload[..payload_len])?;
        if echoed != value {
            return Err(ProtocolError::Mismatch {
                sent: value,
                received: echoed,
            }
            .into());
        }

        Ok(echoed)
    }

    /// Reads until `buf` is full or the stream reaches EOF, returning the
    /// number of bytes read. A short count is left for the codec to
    /// reject, so truncation surfaces as a protocol error rather than a
    /// transport error.
    async fn read_full(&mut self, buf: &mut [u8]) -> Result<usize, ConnectionError> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = tokio::time::timeout(self.timeout, self.stream.read(&mut buf[filled..]))
                .await
                .map_err(|_| timed_out("read response"))?
                .map_err(|e| classify_io_error(&e))?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        Ok(filled)
    }
}
