//! Shared test fixtures: an in-process echo endpoint.

use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixListener;
use tokio::task::JoinHandle;

use ipcbench_protocol::FRAME_LEN;

/// Binds `path` and spawns an endpoint that echoes whole frames back,
/// serving any number of connections until the handle is dropped.
pub(crate) fn spawn_echo_listener(path: &Path) -> JoinHandle<()> {
    let listener = UnixListener::bind(path).expect("bind echo listener");
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                loop {
                    let mut frame = [0u8; FRAME_LEN];
                    if stream.read_exact(&mut frame).await.is_err() {
                        break;
                    }
                    if stream.write_all(&frame).await.is_err() {
                        break;
                    }
                }
            });
        }
    })
}
