use std::collections::BTreeMap;

use async_trait::async_trait;
use models::Concept;
use tokio::sync::RwLock;

use crate::catalog::store::ConceptStore;
use crate::errors::ServiceError;

/// Volatile ordered map; `list` returns concepts in id order.
#[derive(Default)]
pub struct MemoryConceptStore {
    inner: RwLock<BTreeMap<String, Concept>>,
}

impl MemoryConceptStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl ConceptStore for MemoryConceptStore {
    async fn list(&self) -> Result<Vec<Concept>, ServiceError> {
        Ok(self.inner.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Concept>, ServiceError> {
        Ok(self.inner.read().await.get(id).cloned())
    }

    async fn upsert(&self, concept: Concept) -> Result<Concept, ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(concept.concept_id.clone(), concept.clone());
        Ok(concept)
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.inner.write().await.remove(id).is_some())
    }
}
