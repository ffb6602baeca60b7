//! Catalog data model: the `Concept` domain record and its SeaORM table mapping.

pub mod errors;
pub mod db;
pub mod concept;

pub use concept::Concept;
