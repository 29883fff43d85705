use super::trait_def::SchemaRegistryClient;
use crate::error::RegistryResult;
use crate::schema;
use crate::types::{CompatibilityLevel, SchemaId};
use apache_avro::Schema;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Configuration for the in-memory registry
#[derive(Debug, Clone)]
pub struct MemoryRegistryConfig {
    /// Compatibility level applied to subjects without an override
    ///
    /// Confluent registries default to backward compatibility.
    pub default_level: CompatibilityLevel,
}

impl Default for MemoryRegistryConfig {
    fn default() -> Self {
        Self {
            default_level: CompatibilityLevel::Backward,
        }
    }
}

#[derive(Default)]
struct RegistryState {
    schemas_by_id: HashMap<SchemaId, Schema>,
    ids_by_fingerprint: HashMap<String, SchemaId>,
    subject_versions: HashMap<String, Vec<SchemaId>>,
    subject_levels: HashMap<String, CompatibilityLevel>,
    last_id: SchemaId,
}

impl RegistryState {
    fn allocate_id(&mut self) -> SchemaId {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory implementation of SchemaRegistryClient
///
/// Stores all schemas in memory. Useful for testing and development.
/// Data is lost when the process exits.
///
/// Identifiers are assigned sequentially from 1 and registration is
/// idempotent: the same schema always maps to the same identifier.
/// Compatibility checking applies a field-level approximation of the Avro
/// resolution rules; a real registry is authoritative for production use.
pub struct MemoryRegistryClient {
    state: Arc<RwLock<RegistryState>>,
    config: MemoryRegistryConfig,
}

impl MemoryRegistryClient {
    pub fn new() -> Self {
        Self::with_config(MemoryRegistryConfig::default())
    }

    pub fn with_config(config: MemoryRegistryConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(RegistryState::default())),
            config,
        }
    }
}

impl Default for MemoryRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchemaRegistryClient for MemoryRegistryClient {
    async fn schema_by_id(&self, id: SchemaId) -> RegistryResult<Option<Schema>> {
        let state = self.state.read().await;
        Ok(state.schemas_by_id.get(&id).cloned())
    }

    async fn id_by_schema(&self, schema: &Schema) -> RegistryResult<Option<SchemaId>> {
        let print = schema::fingerprint(schema);
        let state = self.state.read().await;
        Ok(state.ids_by_fingerprint.get(&print).copied())
    }

    async fn register_schema(&self, schema: &Schema) -> RegistryResult<SchemaId> {
        let subject = schema::subject(schema)?;
        let print = schema::fingerprint(schema);

        let mut state = self.state.write().await;
        let known = state.ids_by_fingerprint.get(&print).copied();
        let id = match known {
            Some(id) => id,
            None => {
                let id = state.allocate_id();
                state.ids_by_fingerprint.insert(print, id);
                state.schemas_by_id.insert(id, schema.clone());
                tracing::info!("registered schema {} with id {}", subject, id);
                id
            }
        };

        let versions = state.subject_versions.entry(subject).or_default();
        if !versions.contains(&id) {
            versions.push(id);
        }

        Ok(id)
    }

    async fn check_compatibility(&self, schema: &Schema) -> RegistryResult<bool> {
        let subject = schema::subject(schema)?;

        let state = self.state.read().await;
        let level = state
            .subject_levels
            .get(&subject)
            .copied()
            .unwrap_or(self.config.default_level);

        // A subject with no registered versions accepts any schema.
        let versions = match state.subject_versions.get(&subject) {
            Some(versions) if !versions.is_empty() => versions,
            _ => return Ok(true),
        };

        let targets: Vec<&Schema> = if level.is_transitive() {
            versions
                .iter()
                .filter_map(|id| state.schemas_by_id.get(id))
                .collect()
        } else {
            versions
                .last()
                .and_then(|id| state.schemas_by_id.get(id))
                .into_iter()
                .collect()
        };

        let verdict = targets
            .into_iter()
            .all(|existing| compatible(level, schema, existing));
        tracing::debug!("compatibility of {} at {}: {}", subject, level, verdict);

        Ok(verdict)
    }

    async fn compatibility_level(
        &self,
        subject: &str,
    ) -> RegistryResult<Option<CompatibilityLevel>> {
        let state = self.state.read().await;
        Ok(state.subject_levels.get(subject).copied())
    }

    async fn set_compatibility_level(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> RegistryResult<CompatibilityLevel> {
        let mut state = self.state.write().await;
        state.subject_levels.insert(subject.to_string(), level);
        tracing::info!("compatibility level of {} set to {}", subject, level);
        Ok(level)
    }
}

fn compatible(level: CompatibilityLevel, candidate: &Schema, existing: &Schema) -> bool {
    match level {
        CompatibilityLevel::None => true,
        CompatibilityLevel::Backward | CompatibilityLevel::BackwardTransitive => {
            reads_from(candidate, existing)
        }
        CompatibilityLevel::Forward | CompatibilityLevel::ForwardTransitive => {
            reads_from(existing, candidate)
        }
        CompatibilityLevel::Full | CompatibilityLevel::FullTransitive => {
            reads_from(candidate, existing) && reads_from(existing, candidate)
        }
    }
}

/// Approximates "reader decodes writer": every reader field must exist in the
/// writer record or carry a default. Non-record pairs compare canonical forms.
fn reads_from(reader: &Schema, writer: &Schema) -> bool {
    match (reader, writer) {
        (Schema::Record(reader), Schema::Record(writer)) => reader.fields.iter().all(|field| {
            writer.lookup.contains_key(&field.name) || field.default.is_some()
        }),
        _ => reader.canonical_form() == writer.canonical_form(),
    }
}
