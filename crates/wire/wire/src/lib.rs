//! # Corvus Wire
//!
//! Confluent-compatible wire format for Corvus providing:
//! - Five-byte envelope framing that binds a registry identifier to a raw
//!   Avro payload
//! - A codec seam over dynamic and serde-typed Avro values
//! - Registry-backed serialization and deserialization pipelines
//!
//! ## Example
//!
//! ```rust,ignore
//! use corvus_wire::{AvroDeserializer, AvroSerializer, GenericDatumCodec};
//! use std::sync::Arc;
//!
//! let serializer = AvroSerializer::new(client.clone());
//! let deserializer = AvroDeserializer::new(client);
//! let codec = GenericDatumCodec::new(schema);
//!
//! let bytes = serializer.serialize(&codec, &value).await?;
//! match deserializer.deserialize(&codec, &bytes).await? {
//!     Ok(value) => println!("decoded {:?}", value),
//!     Err(failure) => println!("dead-lettering: {}", failure),
//! }
//! ```

mod codec;
mod deserializer;
mod envelope;
mod error;
mod serializer;

pub use codec::{AvroCodec, GenericDatumCodec, SerdeCodec};
pub use deserializer::AvroDeserializer;
pub use envelope::{HEADER_LEN, MAGIC_BYTE, WireEnvelope};
pub use error::{DecodeFailure, WireError, WireResult};
pub use serializer::AvroSerializer;
