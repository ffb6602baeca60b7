//! Concept catalog: store contract, backends, CSV ingest and the orchestrating service.

pub mod store;
pub mod memory;
pub mod repo;
pub mod csv_loader;
pub mod seed;
pub mod service;

pub use csv_loader::CsvLoader;
pub use service::{CatalogService, IngestReport};
pub use store::ConceptStore;
