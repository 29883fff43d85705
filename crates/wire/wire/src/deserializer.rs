use crate::codec::AvroCodec;
use crate::envelope::WireEnvelope;
use crate::error::{DecodeFailure, WireError, WireResult};
use corvus_registry::SchemaRegistryClient;
use std::sync::Arc;

/// Turns registry-framed wire bytes back into typed values
///
/// Failures travel on two channels. The outer result carries protocol and
/// registry-integrity errors: malformed envelopes, identifiers the registry
/// does not know, failed registry calls. The inner result carries the Avro
/// decode outcome as a value, so a payload that does not decode under its
/// writer schema can be routed (dead-lettered, dropped, retried) without
/// error handling.
pub struct AvroDeserializer {
    client: Arc<dyn SchemaRegistryClient>,
}

impl AvroDeserializer {
    pub fn new(client: Arc<dyn SchemaRegistryClient>) -> Self {
        Self { client }
    }

    /// Deserialize framed wire bytes into a value of the codec's type
    ///
    /// The writer schema is fetched by the identifier in the envelope header
    /// and handed to the codec, which reconciles it against its own reader
    /// schema. An identifier the registry does not know fails before any
    /// Avro decoding is attempted.
    pub async fn deserialize<C: AvroCodec>(
        &self,
        codec: &C,
        bytes: &[u8],
    ) -> WireResult<Result<C::Value, DecodeFailure>> {
        let (schema_id, payload) = WireEnvelope::parse(bytes)?;

        let writer = match self.client.schema_by_id(schema_id).await? {
            Some(schema) => schema,
            None => return Err(WireError::UnknownSchemaId { id: schema_id }),
        };

        match codec.decode(&writer, payload) {
            Ok(value) => Ok(Ok(value)),
            Err(source) => {
                tracing::debug!("payload under schema id {} did not decode: {}", schema_id, source);
                Ok(Err(DecodeFailure { schema_id, source }))
            }
        }
    }
}
