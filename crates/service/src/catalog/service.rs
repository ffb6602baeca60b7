use std::sync::Arc;

use models::Concept;
use tracing::{debug, error, info, instrument};

use crate::catalog::csv_loader::{self, CsvLoader};
use crate::catalog::seed::seed_concepts;
use crate::catalog::store::ConceptStore;
use crate::errors::ServiceError;

/// Outcome of a tabular ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    pub loaded: usize,
}

/// Application service for the concept catalog.
/// The only component that writes to the store; every client read goes through it too.
pub struct CatalogService<S: ConceptStore + ?Sized> {
    store: Arc<S>,
    loader: CsvLoader,
}

impl<S: ConceptStore + ?Sized> CatalogService<S> {
    pub fn new(store: Arc<S>, loader: CsvLoader) -> Self { Self { store, loader } }

    pub async fn get_all(&self) -> Result<Vec<Concept>, ServiceError> { self.store.list().await }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Concept>, ServiceError> { self.store.get(id).await }

    /// Validate then insert-or-replace by `concept_id`.
    #[instrument(skip(self, concept), fields(concept_id = %concept.concept_id))]
    pub async fn add_or_update(&self, concept: Concept) -> Result<Concept, ServiceError> {
        concept.validate()?;
        let saved = self.store.upsert(concept).await?;
        debug!("concept upserted");
        Ok(saved)
    }

    /// Returns whether the id existed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, ServiceError> { self.store.delete(id).await }

    /// Upsert the built-in seed set in order. Re-running leaves the same ten records.
    #[instrument(skip(self))]
    pub async fn load_seed_set(&self) -> Result<usize, ServiceError> {
        let seed = seed_concepts();
        let count = seed.len();
        for concept in seed {
            self.add_or_update(concept).await?;
        }
        info!(count, "hardcoded data loaded");
        Ok(count)
    }

    /// Upsert every record of `data.csv` in file order.
    ///
    /// Best effort: the first bad line stops the ingest, and the records before it stay applied.
    /// A row that fails concept validation is reported as a format error on its line.
    #[instrument(skip(self), fields(resource = %self.loader.resource_path().display()))]
    pub async fn load_tabular_resource(&self) -> Result<IngestReport, ServiceError> {
        let text = match self.loader.read_resource().await {
            Ok(text) => text,
            Err(e) => {
                error!(err = %e, "csv resource unavailable");
                return Err(e);
            }
        };

        let mut loaded = 0usize;
        for record in csv_loader::parse(&text) {
            let outcome = match record {
                Ok(rec) => {
                    let line = rec.line;
                    self.add_or_update(rec.concept).await.map_err(|e| match e {
                        ServiceError::Validation(reason) => ServiceError::CsvFormat { line, reason },
                        other => other,
                    })
                }
                Err(e) => Err(e),
            };
            if let Err(e) = outcome {
                error!(err = %e, loaded, "csv ingest stopped");
                return Err(e);
            }
            loaded += 1;
        }

        info!(loaded, "csv data loaded");
        Ok(IngestReport { loaded })
    }
}
