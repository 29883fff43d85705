use crate::codec::AvroCodec;
use crate::envelope::WireEnvelope;
use crate::error::{WireError, WireResult};
use corvus_registry::SchemaRegistryClient;
use corvus_registry::schema::schema_label;
use std::sync::Arc;

/// Turns typed values into registry-framed wire bytes
///
/// Serialization is lookup-first: the codec's schema must already hold an
/// identifier in the registry, otherwise the call fails without mutating
/// registry state. Successful output is immediately decodable by the decode
/// pipeline against the same registry.
pub struct AvroSerializer {
    client: Arc<dyn SchemaRegistryClient>,
}

impl AvroSerializer {
    pub fn new(client: Arc<dyn SchemaRegistryClient>) -> Self {
        Self { client }
    }

    /// Serialize `value` into framed wire bytes
    ///
    /// Fails with `SchemaNotRegistered` when the registry has no identifier
    /// for the codec's schema; a miss is never auto-registered.
    pub async fn serialize<C: AvroCodec>(
        &self,
        codec: &C,
        value: &C::Value,
    ) -> WireResult<Vec<u8>> {
        let schema = codec.schema();
        let id = match self.client.id_by_schema(schema).await? {
            Some(id) => id,
            None => {
                return Err(WireError::SchemaNotRegistered {
                    full_name: schema_label(schema),
                });
            }
        };

        let payload = codec.encode(value).map_err(|source| WireError::Encode {
            full_name: schema_label(schema),
            source,
        })?;

        tracing::debug!("serialized {} bytes under schema id {}", payload.len(), id);
        Ok(WireEnvelope::new(id, payload).to_bytes())
    }
}
