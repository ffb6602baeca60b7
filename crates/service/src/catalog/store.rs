use async_trait::async_trait;
use models::Concept;

use crate::errors::ServiceError;

/// Trait abstraction for the concept catalog storage, keyed by `concept_id`.
/// Implementations can be in-memory, file-backed, or database-backed.
///
/// `upsert` replaces any record with the same id as one atomic step; writers to the
/// same id serialize and the last one wins.
#[async_trait]
pub trait ConceptStore: Send + Sync {
    /// Every stored concept; order is backend-defined but stable for one snapshot.
    async fn list(&self) -> Result<Vec<Concept>, ServiceError>;
    async fn get(&self, id: &str) -> Result<Option<Concept>, ServiceError>;
    async fn upsert(&self, concept: Concept) -> Result<Concept, ServiceError>;
    /// Returns whether a record existed; a missing id is not an error.
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}
