//! Confluent wire envelope framing.
//!
//! A framed message is the magic byte, the big-endian signed 32-bit schema
//! identifier, and the raw Avro payload with no length prefix:
//!
//! ```text
//! [0x00][id byte 0][id byte 1][id byte 2][id byte 3][payload ...]
//! ```
//!
//! The payload length is implied by schema-driven decoding, so the header is
//! all the framing there is.

use crate::error::{WireError, WireResult};
use corvus_registry::SchemaId;

/// First byte of every framed message.
pub const MAGIC_BYTE: u8 = 0x00;

/// Fixed header length: magic byte plus the 4-byte schema identifier.
pub const HEADER_LEN: usize = 5;

/// A schema identifier bound to an Avro-encoded payload
///
/// The envelope never carries the schema itself, only its registry
/// identifier; the registry is the system of record for what the identifier
/// means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireEnvelope {
    /// Registry identifier of the payload's writer schema.
    pub schema_id: SchemaId,

    /// Raw Avro binary encoding of a value under that schema.
    pub payload: Vec<u8>,
}

impl WireEnvelope {
    pub fn new(schema_id: SchemaId, payload: Vec<u8>) -> Self {
        Self { schema_id, payload }
    }

    /// Frame the payload, producing exactly `HEADER_LEN + payload.len()` bytes
    ///
    /// Framing never fails; the identifier spans the full signed 32-bit range.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.payload.len());
        bytes.push(MAGIC_BYTE);
        bytes.extend_from_slice(&self.schema_id.to_be_bytes());
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Split framed bytes into the schema identifier and the payload slice
    ///
    /// The magic byte is checked first, so a wrong leading byte reports
    /// `MagicByteMismatch` no matter how short the input is; inputs shorter
    /// than the header otherwise report `MalformedEnvelope`. The payload may
    /// be empty.
    pub fn parse(bytes: &[u8]) -> WireResult<(SchemaId, &[u8])> {
        let first = match bytes.first() {
            Some(first) => *first,
            None => return Err(WireError::MalformedEnvelope { len: 0 }),
        };
        if first != MAGIC_BYTE {
            return Err(WireError::MagicByteMismatch { found: first });
        }
        if bytes.len() < HEADER_LEN {
            return Err(WireError::MalformedEnvelope { len: bytes.len() });
        }

        let schema_id = i32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
        Ok((schema_id, &bytes[HEADER_LEN..]))
    }

    /// Parse framed bytes into an owned envelope.
    pub fn from_bytes(bytes: &[u8]) -> WireResult<Self> {
        let (schema_id, payload) = Self::parse(bytes)?;
        Ok(Self {
            schema_id,
            payload: payload.to_vec(),
        })
    }
}
