//! Wire format error types.

use corvus_registry::{RegistryError, SchemaId};
use thiserror::Error;

/// Result type for wire format operations.
pub type WireResult<T> = Result<T, WireError>;

/// Error type for envelope framing and the serialization pipelines.
#[derive(Debug, Error)]
pub enum WireError {
    /// Input shorter than the fixed envelope header.
    #[error("Malformed envelope: {len} bytes is shorter than the 5-byte header")]
    MalformedEnvelope { len: usize },

    /// First byte of the envelope is not the magic byte.
    #[error("Magic byte mismatch: expected 0x00, found {found:#04x}")]
    MagicByteMismatch { found: u8 },

    /// Serialization requested for a schema the registry has no id for.
    #[error("Schema {full_name} is not registered")]
    SchemaNotRegistered { full_name: String },

    /// Envelope referenced a schema id the registry does not know.
    #[error("Unknown schema id: {id}")]
    UnknownSchemaId { id: SchemaId },

    /// Avro encoding failed while serializing a value.
    #[error("Failed to encode value under {full_name}: {source}")]
    Encode {
        full_name: String,
        source: apache_avro::Error,
    },

    /// Registry call failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Avro-level decode failure for a framed payload.
///
/// Unlike the variants of [`WireError`], this is an expected outcome: the
/// envelope was well-formed and the schema known, but the payload did not
/// decode under it. The decode pipeline returns it as a value so callers can
/// branch (retry, dead-letter, drop) without error handling.
#[derive(Debug, Error)]
#[error("Payload under schema id {schema_id} failed to decode: {source}")]
pub struct DecodeFailure {
    /// Identifier the envelope carried.
    pub schema_id: SchemaId,

    /// Underlying Avro decode error.
    pub source: apache_avro::Error,
}
