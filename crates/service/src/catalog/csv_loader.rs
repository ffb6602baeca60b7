//! Tabular seed file ingest.
//!
//! Format: one header line (ignored whatever it contains), then one concept per line:
//!
//! ```text
//! conceptId,displayName,description,parentIds,childIds,alternateNames
//! ```
//!
//! Fields are split on every `,` (no quoting) and edge lists on every `;`. An empty edge
//! field therefore becomes `[""]`. Columns past the sixth are ignored. Nothing is trimmed
//! or de-duplicated.

use std::path::{Path, PathBuf};

use models::Concept;
use tokio::fs;
use tracing::debug;

use crate::errors::ServiceError;

/// File name of the bundled tabular resource.
pub const RESOURCE_NAME: &str = "data.csv";

const FIELD_COUNT: usize = 6;

/// One parsed data line together with its 1-based line number in the resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub line: usize,
    pub concept: Concept,
}

/// Locates and reads `data.csv` from a resource directory. Never writes to a store.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    resource_path: PathBuf,
}

impl CsvLoader {
    pub fn new(resource_dir: impl AsRef<Path>) -> Self {
        Self { resource_path: resource_dir.as_ref().join(RESOURCE_NAME) }
    }

    pub fn resource_path(&self) -> &Path { &self.resource_path }

    /// Read the whole resource as UTF-8 text.
    pub async fn read_resource(&self) -> Result<String, ServiceError> {
        let bytes = fs::read(&self.resource_path)
            .await
            .map_err(|e| ServiceError::Ingest(format!("{}: {e}", self.resource_path.display())))?;
        debug!(path = %self.resource_path.display(), bytes = bytes.len(), "read csv resource");
        String::from_utf8(bytes).map_err(|e| {
            ServiceError::Ingest(format!("{} is not valid UTF-8: {e}", self.resource_path.display()))
        })
    }

    /// Read and parse the resource in one go; the first malformed line fails the whole load.
    pub async fn load(&self) -> Result<Vec<Concept>, ServiceError> {
        let text = self.read_resource().await?;
        parse(&text).map(|r| r.map(|rec| rec.concept)).collect()
    }
}

/// Lazily parse resource text into records in file order, skipping the header line.
pub fn parse(text: &str) -> Records<'_> {
    Records { lines: text.lines().enumerate().skip(1) }
}

/// Iterator returned by [`parse`].
pub struct Records<'a> {
    lines: std::iter::Skip<std::iter::Enumerate<std::str::Lines<'a>>>,
}

impl Iterator for Records<'_> {
    type Item = Result<CsvRecord, ServiceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, raw) = self.lines.next()?;
        let line = idx + 1;
        Some(parse_line(line, raw).map(|concept| CsvRecord { line, concept }))
    }
}

fn parse_line(line: usize, raw: &str) -> Result<Concept, ServiceError> {
    let fields: Vec<&str> = raw.split(',').collect();
    // 多于六列时只取前六列，其余忽略
    match fields.as_slice() {
        [id, name, description, parents, children, alternate, ..] => Ok(Concept {
            concept_id: id.to_string(),
            display_name: name.to_string(),
            description: description.to_string(),
            parent_ids: split_ids(parents),
            child_ids: split_ids(children),
            alternate_names: alternate.to_string(),
        }),
        short => Err(ServiceError::CsvFormat {
            line,
            reason: format!("expected at least {FIELD_COUNT} comma-separated fields, found {}", short.len()),
        }),
    }
}

fn split_ids(field: &str) -> Vec<String> {
    field.split(';').map(str::to_string).collect()
}
