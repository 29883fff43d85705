use crate::client::SchemaRegistryClient;
use crate::error::RegistryResult;
use crate::schema;
use crate::types::{CompatibilityLevel, SubjectCompatibility, SubjectRegistration};
use apache_avro::Schema;
use std::sync::Arc;

/// Drives compatibility verification and registration over a schema's subjects
///
/// A record schema addresses a single subject; a tagged union addresses one
/// subject per non-null member, in declaration order. Registry calls are
/// strictly sequential and the first failure aborts the whole operation, so
/// callers either get a complete ordered result list or an error.
pub struct SchemaManager {
    client: Arc<dyn SchemaRegistryClient>,
}

impl SchemaManager {
    pub fn new(client: Arc<dyn SchemaRegistryClient>) -> Self {
        Self { client }
    }

    /// Verify `schema` against the registry at the given compatibility level
    ///
    /// For each subject schema, in order: the subject's compatibility level
    /// is set to `level` first, then the schema is checked under the level
    /// just applied. Returns one verdict per subject, in member order.
    pub async fn verify_compatibility(
        &self,
        schema: &Schema,
        level: CompatibilityLevel,
    ) -> RegistryResult<Vec<SubjectCompatibility>> {
        let members = schema::subject_schemas(schema)?;
        let mut results = Vec::with_capacity(members.len());

        for member in members {
            let subject = schema::subject(member)?;
            self.client.set_compatibility_level(&subject, level).await?;
            let compatible = self.client.check_compatibility(member).await?;

            tracing::debug!("verified {} at {}: compatible={}", subject, level, compatible);
            results.push(SubjectCompatibility {
                schema: member.clone(),
                compatible,
            });
        }

        Ok(results)
    }

    /// Register every subject schema of `schema` with the registry
    ///
    /// Returns the assigned identifiers in member order.
    pub async fn register_schemas(
        &self,
        schema: &Schema,
    ) -> RegistryResult<Vec<SubjectRegistration>> {
        let members = schema::subject_schemas(schema)?;
        let mut results = Vec::with_capacity(members.len());

        for member in members {
            let id = self.client.register_schema(member).await?;

            tracing::info!("registered {} with id {}", schema::schema_label(member), id);
            results.push(SubjectRegistration {
                schema: member.clone(),
                id,
            });
        }

        Ok(results)
    }
}
