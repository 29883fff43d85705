//! Schema shape dispatch and subject naming.
//!
//! Registry subjects are keyed by schema full name. A top-level record maps
//! onto a single subject; a tagged union maps onto one subject per non-null
//! member; every other Avro shape has no subject and is rejected.

use apache_avro::Schema;
use apache_avro::schema::SchemaKind;
use sha2::{Digest, Sha256};

use crate::error::{RegistryError, RegistryResult};

/// Resolves the ordered list of subject schemas inside `schema`.
///
/// A record resolves to itself; a union resolves to its members with any
/// `null` member removed, in declaration order. Any other shape fails with
/// [`RegistryError::UnsupportedSchemaType`].
pub fn subject_schemas(schema: &Schema) -> RegistryResult<Vec<&Schema>> {
    match schema {
        Schema::Record(_) => Ok(vec![schema]),
        Schema::Union(union) => Ok(union
            .variants()
            .iter()
            .filter(|member| !matches!(member, Schema::Null))
            .collect()),
        other => Err(RegistryError::UnsupportedSchemaType {
            kind: kind_name(other),
        }),
    }
}

/// Returns the full name (namespace + name) of a named schema.
///
/// Records, enums, fixed schemas and named references carry a full name;
/// every other shape returns `None`.
pub fn full_name(schema: &Schema) -> Option<String> {
    match schema {
        Schema::Record(record) => Some(record.name.fullname(None)),
        Schema::Enum(inner) => Some(inner.name.fullname(None)),
        Schema::Fixed(inner) => Some(inner.name.fullname(None)),
        Schema::Ref { name } => Some(name.fullname(None)),
        _ => None,
    }
}

/// Resolves the registry subject for `schema`, failing for shapes without
/// a full name.
pub fn subject(schema: &Schema) -> RegistryResult<String> {
    full_name(schema).ok_or_else(|| RegistryError::UnsupportedSchemaType {
        kind: kind_name(schema),
    })
}

/// Human-readable label for a schema: its full name when it has one, its
/// Avro kind otherwise. Used in error messages and logs.
pub fn schema_label(schema: &Schema) -> String {
    full_name(schema).unwrap_or_else(|| kind_name(schema))
}

/// Fingerprint of a schema: lowercase hex SHA-256 over its canonical form.
///
/// Two schemas with the same fingerprint are the same schema as far as the
/// registry is concerned, regardless of formatting or attribute order.
pub fn fingerprint(schema: &Schema) -> String {
    hex::encode(Sha256::digest(schema.canonical_form().as_bytes()))
}

fn kind_name(schema: &Schema) -> String {
    format!("{:?}", SchemaKind::from(schema))
}
