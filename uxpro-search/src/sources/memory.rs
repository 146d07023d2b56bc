//! In-memory table source, for embedding small tables and for tests.

use std::collections::HashMap;

use crate::error::SourceError;
use crate::source::TableSource;
use crate::types::Row;

/// Serves tables from a locator → rows map.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableSource {
    tables: HashMap<String, Vec<Row>>,
}

impl MemoryTableSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rows` under `locator`, replacing any earlier table.
    pub fn insert(&mut self, locator: impl Into<String>, rows: Vec<Row>) {
        self.tables.insert(locator.into(), rows);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_table(mut self, locator: impl Into<String>, rows: Vec<Row>) -> Self {
        self.insert(locator, rows);
        self
    }
}

impl TableSource for MemoryTableSource {
    fn load(&self, locator: &str) -> Result<Vec<Row>, SourceError> {
        self.tables
            .get(locator)
            .cloned()
            .ok_or_else(|| SourceError::Missing(locator.to_string()))
    }
}
