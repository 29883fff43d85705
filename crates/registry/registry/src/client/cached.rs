use super::trait_def::SchemaRegistryClient;
use crate::error::RegistryResult;
use crate::schema;
use crate::types::{CompatibilityLevel, SchemaId};
use apache_avro::Schema;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Caching layer over another SchemaRegistryClient
///
/// Registry identifiers are immutable once assigned, so resolved id/schema
/// pairs are kept for the lifetime of the client. Only successful
/// resolutions enter the cache: a `None` is asked again next time (the
/// schema may get registered in between), and a failed call leaves the
/// cache untouched. Compatibility operations always pass through, since
/// levels can change server-side at any time.
pub struct CachedRegistryClient {
    inner: Arc<dyn SchemaRegistryClient>,
    schemas_by_id: RwLock<HashMap<SchemaId, Schema>>,
    ids_by_fingerprint: RwLock<HashMap<String, SchemaId>>,
}

impl CachedRegistryClient {
    pub fn new(inner: Arc<dyn SchemaRegistryClient>) -> Self {
        Self {
            inner,
            schemas_by_id: RwLock::new(HashMap::new()),
            ids_by_fingerprint: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SchemaRegistryClient for CachedRegistryClient {
    async fn schema_by_id(&self, id: SchemaId) -> RegistryResult<Option<Schema>> {
        {
            let cache = self.schemas_by_id.read().await;
            if let Some(schema) = cache.get(&id) {
                return Ok(Some(schema.clone()));
            }
        }

        let fetched = self.inner.schema_by_id(id).await?;
        if let Some(schema) = &fetched {
            let mut cache = self.schemas_by_id.write().await;
            cache.insert(id, schema.clone());
        }

        Ok(fetched)
    }

    async fn id_by_schema(&self, schema: &Schema) -> RegistryResult<Option<SchemaId>> {
        let print = schema::fingerprint(schema);
        {
            let cache = self.ids_by_fingerprint.read().await;
            if let Some(id) = cache.get(&print) {
                return Ok(Some(*id));
            }
        }

        let fetched = self.inner.id_by_schema(schema).await?;
        if let Some(id) = fetched {
            let mut cache = self.ids_by_fingerprint.write().await;
            cache.insert(print, id);
        }

        Ok(fetched)
    }

    async fn register_schema(&self, schema: &Schema) -> RegistryResult<SchemaId> {
        let id = self.inner.register_schema(schema).await?;

        // A fresh registration resolves both lookup directions.
        let print = schema::fingerprint(schema);
        let mut ids = self.ids_by_fingerprint.write().await;
        ids.insert(print, id);
        drop(ids);

        let mut schemas = self.schemas_by_id.write().await;
        schemas.insert(id, schema.clone());

        Ok(id)
    }

    async fn check_compatibility(&self, schema: &Schema) -> RegistryResult<bool> {
        self.inner.check_compatibility(schema).await
    }

    async fn compatibility_level(
        &self,
        subject: &str,
    ) -> RegistryResult<Option<CompatibilityLevel>> {
        self.inner.compatibility_level(subject).await
    }

    async fn set_compatibility_level(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> RegistryResult<CompatibilityLevel> {
        self.inner.set_compatibility_level(subject, level).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::MemoryRegistryClient;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Delegating client that counts how often each lookup reaches it
    struct CountingClient {
        inner: Arc<MemoryRegistryClient>,
        schema_fetches: AtomicUsize,
        id_lookups: AtomicUsize,
        level_writes: AtomicUsize,
    }

    impl CountingClient {
        fn new(inner: Arc<MemoryRegistryClient>) -> Self {
            Self {
                inner,
                schema_fetches: AtomicUsize::new(0),
                id_lookups: AtomicUsize::new(0),
                level_writes: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SchemaRegistryClient for CountingClient {
        async fn schema_by_id(&self, id: SchemaId) -> RegistryResult<Option<Schema>> {
            self.schema_fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.schema_by_id(id).await
        }

        async fn id_by_schema(&self, schema: &Schema) -> RegistryResult<Option<SchemaId>> {
            self.id_lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.id_by_schema(schema).await
        }

        async fn register_schema(&self, schema: &Schema) -> RegistryResult<SchemaId> {
            self.inner.register_schema(schema).await
        }

        async fn check_compatibility(&self, schema: &Schema) -> RegistryResult<bool> {
            self.inner.check_compatibility(schema).await
        }

        async fn compatibility_level(
            &self,
            subject: &str,
        ) -> RegistryResult<Option<CompatibilityLevel>> {
            self.inner.compatibility_level(subject).await
        }

        async fn set_compatibility_level(
            &self,
            subject: &str,
            level: CompatibilityLevel,
        ) -> RegistryResult<CompatibilityLevel> {
            self.level_writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set_compatibility_level(subject, level).await
        }
    }

    fn order_schema() -> Schema {
        Schema::parse_str(
            r#"{"type": "record", "name": "Order", "namespace": "corvus.test",
                "fields": [{"name": "total", "type": "double"}]}"#,
        )
        .unwrap()
    }

    fn harness() -> (Arc<MemoryRegistryClient>, Arc<CountingClient>, CachedRegistryClient) {
        let memory = Arc::new(MemoryRegistryClient::new());
        let counting = Arc::new(CountingClient::new(memory.clone()));
        let cached = CachedRegistryClient::new(counting.clone());
        (memory, counting, cached)
    }

    #[tokio::test]
    async fn test_schema_fetch_hits_cache() {
        let (memory, counting, cached) = harness();
        let id = memory.register_schema(&order_schema()).await.unwrap();

        let first = cached.schema_by_id(id).await.unwrap().unwrap();
        let second = cached.schema_by_id(id).await.unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!(counting.schema_fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_miss_is_not_cached() {
        let (memory, counting, cached) = harness();
        let schema = order_schema();

        assert!(cached.id_by_schema(&schema).await.unwrap().is_none());
        assert!(cached.id_by_schema(&schema).await.unwrap().is_none());
        assert_eq!(counting.id_lookups.load(Ordering::SeqCst), 2);

        let id = memory.register_schema(&schema).await.unwrap();
        assert_eq!(cached.id_by_schema(&schema).await.unwrap(), Some(id));
        assert_eq!(cached.id_by_schema(&schema).await.unwrap(), Some(id));
        assert_eq!(counting.id_lookups.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_register_primes_both_directions() {
        let (_memory, counting, cached) = harness();
        let schema = order_schema();

        let id = cached.register_schema(&schema).await.unwrap();

        assert_eq!(cached.id_by_schema(&schema).await.unwrap(), Some(id));
        assert_eq!(cached.schema_by_id(id).await.unwrap().unwrap(), schema);
        assert_eq!(counting.id_lookups.load(Ordering::SeqCst), 0);
        assert_eq!(counting.schema_fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_level_writes_pass_through() {
        let (_memory, counting, cached) = harness();

        for _ in 0..2 {
            cached
                .set_compatibility_level("corvus.test.Order", CompatibilityLevel::Full)
                .await
                .unwrap();
        }
        assert_eq!(counting.level_writes.load(Ordering::SeqCst), 2);
    }
}
