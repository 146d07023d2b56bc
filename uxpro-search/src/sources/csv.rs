//! CSV-backed table source.
//!
//! Reads `<data_dir>/<locator>` as UTF-8 CSV with a header row. Each record
//! becomes a [`Row`] whose columns follow the header order. Records shorter
//! than the header simply lack the trailing columns.

use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::source::TableSource;
use crate::types::Row;

/// Loads tables from CSV files under a data directory.
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    data_dir: PathBuf,
}

impl CsvTableSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Root directory that locators are resolved against.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path for `locator`.
    pub fn path_for(&self, locator: &str) -> PathBuf {
        self.data_dir.join(locator)
    }
}

impl TableSource for CsvTableSource {
    fn load(&self, locator: &str) -> Result<Vec<Row>, SourceError> {
        let path = self.path_for(locator);
        if !path.is_file() {
            return Err(SourceError::Missing(path.display().to_string()));
        }

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)?;
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(headers.iter().zip(record.iter()).collect::<Row>());
        }

        tracing::trace!(path = %path.display(), rows = rows.len(), "loaded CSV table");
        Ok(rows)
    }
}
