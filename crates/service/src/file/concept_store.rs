use std::sync::Arc;

use async_trait::async_trait;
use models::Concept;

use crate::catalog::store::ConceptStore;
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// File-backed concept catalog.
/// Keeps a map of `concept_id -> Concept` persisted as JSON; reopening the file rehydrates it.
#[derive(Clone)]
pub struct FileConceptStore {
    store: Arc<JsonMapStore<String, Concept>>,
}

impl FileConceptStore {
    /// Initialize the store from the given file path. Creates the file if missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonMapStore::<String, Concept>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl ConceptStore for FileConceptStore {
    async fn list(&self) -> Result<Vec<Concept>, ServiceError> {
        Ok(self.store.list().await.into_iter().map(|(_, v)| v).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Concept>, ServiceError> {
        Ok(self.store.get(&id.to_string()).await)
    }

    async fn upsert(&self, concept: Concept) -> Result<Concept, ServiceError> {
        self.store.insert(concept.concept_id.clone(), concept.clone()).await?;
        Ok(concept)
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        self.store.remove(&id.to_string()).await
    }
}
