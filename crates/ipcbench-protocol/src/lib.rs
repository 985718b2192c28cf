//! Fixed binary framing for the microkernel IPC echo protocol.
//!
//! Every request is a 16-byte header of four little-endian `u32` fields
//! followed by an 8-byte little-endian `u64` payload:
//!
//! ```text
//! +--------------+-----------+---------+--------------+----------------+
//! | message_type | version   | flags   | payload_len  | payload        |
//! | u32 LE       | u32 LE    | u32 LE  | u32 LE (= 8) | u64 LE counter |
//! +--------------+-----------+---------+--------------+----------------+
//! ```
//!
//! The header field values are protocol constants, not negotiated. The
//! endpoint echoes the frame back; only the payload round-trip is part of
//! the contract, header contents of the response are not inspected beyond
//! their length.

mod error;
mod frame;

pub use error::{ProtocolError, ProtocolResult};
pub use frame::{FrameHeader, decode_response, encode_request};

/// Message type carried in every request header.
pub const MESSAGE_TYPE: u32 = 1;

/// Protocol version carried in every request header.
pub const PROTOCOL_VERSION: u32 = 2;

/// Flags tag marking an echo request.
pub const ECHO_FLAGS: u32 = 0x10;

/// Header length in bytes.
pub const HEADER_LEN: usize = 16;

/// Payload length in bytes; always 8 in this protocol.
pub const PAYLOAD_LEN: usize = 8;

/// Total length of an encoded request frame.
pub const FRAME_LEN: usize = HEADER_LEN + PAYLOAD_LEN;
