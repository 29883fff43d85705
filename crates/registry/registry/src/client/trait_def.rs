use crate::error::RegistryResult;
use crate::types::{CompatibilityLevel, SchemaId};
use apache_avro::Schema;
use async_trait::async_trait;

/// Trait for schema registry access
///
/// Implementations talk to a registry that maps schemas to stable integer
/// identifiers per subject and enforces compatibility rules. Operations that
/// take a schema derive the subject from the schema's full name; operations
/// that take a subject address the registry's configuration directly.
///
/// Every operation is a remote call that may suspend. Failures are propagated
/// unchanged; the core applies no retry, timeout, or cancellation of its own.
#[async_trait]
pub trait SchemaRegistryClient: Send + Sync {
    /// Fetch the schema registered under `id`
    ///
    /// Returns `None` when the registry has no schema for the identifier.
    async fn schema_by_id(&self, id: SchemaId) -> RegistryResult<Option<Schema>>;

    /// Look up the identifier the registry assigned to `schema`
    ///
    /// Returns `None` when the schema has never been registered. A lookup
    /// never registers anything.
    async fn id_by_schema(&self, schema: &Schema) -> RegistryResult<Option<SchemaId>>;

    /// Register `schema` under its full name and return its identifier
    ///
    /// Registering the same schema twice returns the same identifier.
    async fn register_schema(&self, schema: &Schema) -> RegistryResult<SchemaId>;

    /// Check `schema` against the registered versions of its subject
    ///
    /// Verdicts follow the subject's configured compatibility level.
    async fn check_compatibility(&self, schema: &Schema) -> RegistryResult<bool>;

    /// Get the compatibility level configured for `subject`
    ///
    /// Returns `None` when the subject has no override and falls back to the
    /// registry-wide default.
    async fn compatibility_level(&self, subject: &str)
        -> RegistryResult<Option<CompatibilityLevel>>;

    /// Set the compatibility level for `subject`, returning the applied level
    async fn set_compatibility_level(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> RegistryResult<CompatibilityLevel>;
}
