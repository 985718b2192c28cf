//! Encode and decode the fixed 24-byte echo frame.

use crate::error::{ProtocolError, ProtocolResult};
use crate::{ECHO_FLAGS, FRAME_LEN, HEADER_LEN, MESSAGE_TYPE, PAYLOAD_LEN, PROTOCOL_VERSION};

/// The 16-byte frame header.
///
/// All fields are serialized little-endian regardless of host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub message_type: u32,
    pub version: u32,
    pub flags: u32,
    pub payload_len: u32,
}

impl FrameHeader {
    /// Header for an echo request, all fields set to protocol constants.
    pub fn echo_request() -> Self {
        Self {
            message_type: MESSAGE_TYPE,
            version: PROTOCOL_VERSION,
            flags: ECHO_FLAGS,
            payload_len: PAYLOAD_LEN as u32,
        }
    }

    /// Serializes the header to its wire representation.
    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..4].copy_from_slice(&self.message_type.to_le_bytes());
        buf[4..8].copy_from_slice(&self.version.to_le_bytes());
        buf[8..12].copy_from_slice(&self.flags.to_le_bytes());
        buf[12..16].copy_from_slice(&self.payload_len.to_le_bytes());
        buf
    }
}

/// Encodes a request frame carrying `value` as its payload.
///
/// Infallible: the header is constant and any `u64` is representable in
/// the 8-byte payload.
pub fn encode_request(value: u64) -> [u8; FRAME_LEN] {
    let mut buf = [0u8; FRAME_LEN];
    buf[..HEADER_LEN].copy_from_slice(&FrameHeader::echo_request().to_bytes());
    buf[HEADER_LEN..].copy_from_slice(&value.to_le_bytes());
    buf
}

/// Decodes an echoed response from its header and payload bytes.
///
/// The echo contract only requires the payload to round-trip, so header
/// contents are validated by length alone.
pub fn decode_response(header: &[u8], payload: &[u8]) -> ProtocolResult<u64> {
    if header.len() != HEADER_LEN {
        return Err(ProtocolError::ShortRead {
            expected: HEADER_LEN,
            received: header.len(),
        });
    }

    if payload.len() != PAYLOAD_LEN {
        return Err(ProtocolError::ShortRead {
            expected: PAYLOAD_LEN,
            received: payload.len(),
        });
    }

    let bytes: [u8; PAYLOAD_LEN] = payload.try_into().expect("length checked above");
    Ok(u64::from_le_bytes(bytes))
}
