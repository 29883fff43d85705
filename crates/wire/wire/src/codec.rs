//! Avro codec seam between typed values and raw datum bytes.
//!
//! The pipelines stay generic over how a value maps to Avro binary. A codec
//! owns the schema for its value type; decode additionally receives the
//! writer schema fetched from the registry and reconciles the two, so schema
//! evolution is handled here and not in the framing layer.

use apache_avro::types::Value;
use apache_avro::{Schema, from_avro_datum, to_avro_datum};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Cursor;
use std::marker::PhantomData;

/// Encodes and decodes one value type against its Avro schema
pub trait AvroCodec: Send + Sync {
    /// Value type this codec handles.
    type Value;

    /// Schema of this codec's value type
    ///
    /// Serves as the lookup key during serialization and as the reader
    /// schema during deserialization.
    fn schema(&self) -> &Schema;

    /// Encode a value to raw Avro datum bytes (no framing)
    fn encode(&self, value: &Self::Value) -> Result<Vec<u8>, apache_avro::Error>;

    /// Decode raw datum bytes written under `writer_schema`
    ///
    /// Implementations resolve the writer schema against their own reader
    /// schema, applying defaults and promotions where Avro allows them.
    fn decode(&self, writer_schema: &Schema, payload: &[u8])
        -> Result<Self::Value, apache_avro::Error>;
}

/// Codec over dynamic `apache_avro::types::Value` values
pub struct GenericDatumCodec {
    schema: Schema,
}

impl GenericDatumCodec {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }
}

impl AvroCodec for GenericDatumCodec {
    type Value = Value;

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, apache_avro::Error> {
        to_avro_datum(&self.schema, value.clone())
    }

    fn decode(&self, writer_schema: &Schema, payload: &[u8]) -> Result<Value, apache_avro::Error> {
        let mut reader = Cursor::new(payload);
        from_avro_datum(writer_schema, &mut reader, Some(&self.schema))
    }
}

/// Codec for a concrete serde type
///
/// Values pass through the `apache_avro` serde bridge on both sides, so any
/// `Serialize + DeserializeOwned` type whose shape matches the schema works.
pub struct SerdeCodec<T> {
    schema: Schema,
    marker: PhantomData<fn() -> T>,
}

impl<T> SerdeCodec<T> {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            marker: PhantomData,
        }
    }
}

impl<T> AvroCodec for SerdeCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn encode(&self, value: &T) -> Result<Vec<u8>, apache_avro::Error> {
        let value = apache_avro::to_value(value)?;
        to_avro_datum(&self.schema, value)
    }

    fn decode(&self, writer_schema: &Schema, payload: &[u8]) -> Result<T, apache_avro::Error> {
        let mut reader = Cursor::new(payload);
        let value = from_avro_datum(writer_schema, &mut reader, Some(&self.schema))?;
        apache_avro::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apache_avro::types::Record;
    use serde::Deserialize;

    fn reading_schema() -> Schema {
        Schema::parse_str(
            r#"{"type": "record", "name": "Reading", "namespace": "corvus.test",
                "fields": [
                    {"name": "device", "type": "string"},
                    {"name": "value", "type": "double"}
                ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generic_datum_round_trip() {
        let codec = GenericDatumCodec::new(reading_schema());

        let mut record = Record::new(codec.schema()).unwrap();
        record.put("device", "sensor-1");
        record.put("value", 21.5);
        let value = Value::from(record);

        let bytes = codec.encode(&value).unwrap();
        let decoded = codec.decode(&reading_schema(), &bytes).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_serde_round_trip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Reading {
            device: String,
            value: f64,
        }

        let codec = SerdeCodec::<Reading>::new(reading_schema());
        let reading = Reading {
            device: "sensor-1".to_string(),
            value: 21.5,
        };

        let bytes = codec.encode(&reading).unwrap();
        let decoded = codec.decode(&reading_schema(), &bytes).unwrap();
        assert_eq!(decoded, reading);
    }

    #[test]
    fn test_decode_applies_reader_defaults() {
        let writer = Schema::parse_str(
            r#"{"type": "record", "name": "Reading", "namespace": "corvus.test",
                "fields": [{"name": "device", "type": "string"}]}"#,
        )
        .unwrap();
        let reader = Schema::parse_str(
            r#"{"type": "record", "name": "Reading", "namespace": "corvus.test",
                "fields": [
                    {"name": "device", "type": "string"},
                    {"name": "unit", "type": "string", "default": "celsius"}
                ]}"#,
        )
        .unwrap();

        let mut record = Record::new(&writer).unwrap();
        record.put("device", "sensor-1");
        let bytes = to_avro_datum(&writer, record).unwrap();

        let codec = GenericDatumCodec::new(reader);
        let decoded = codec.decode(&writer, &bytes).unwrap();
        assert_eq!(
            decoded,
            Value::Record(vec![
                ("device".to_string(), Value::String("sensor-1".to_string())),
                ("unit".to_string(), Value::String("celsius".to_string())),
            ])
        );
    }

    #[test]
    fn test_garbage_payload_fails() {
        let codec = GenericDatumCodec::new(reading_schema());
        assert!(codec.decode(&reading_schema(), &[0xff, 0xff, 0xff]).is_err());
    }
}
