//! File-backed implementations of service store traits.

pub mod concept_store;
