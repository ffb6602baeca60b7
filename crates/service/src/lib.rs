//! Service layer for the clinical concept catalog.
//! - `catalog::CatalogService` is the only writer of the concept store.
//! - Store backends live behind the `catalog::store::ConceptStore` trait.
//! - `catalog::csv_loader` turns the bundled `data.csv` into concepts without touching storage.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod file;
pub mod catalog;
