//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

use std::path::Path;

/// Ensure the data directory exists; warn on a missing resource directory.
pub async fn ensure_env(resource_dir: &Path, data_dir: &Path) -> anyhow::Result<()> {
    common::env::ensure_env(resource_dir, data_dir).await
}
