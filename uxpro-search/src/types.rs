//! Core types: rows, scored positions, and search responses.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One table row: an ordered mapping from column name to value.
///
/// Rows are identified only by their position in the table. Serializes as a
/// map that keeps column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell. A repeated column name replaces the earlier value in place.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Returns the value stored under `column`, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.cells.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Keeps only `columns`, in the order given. Columns this row does not
    /// have are omitted rather than filled with empty values.
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> Row {
        columns
            .iter()
            .filter_map(|col| {
                let col = col.as_ref();
                self.get(col).map(|value| (col.to_string(), value.to_string()))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Row, A::Error> {
                let mut row = Row::new();
                while let Some((column, value)) = access.next_entry::<String, String>()? {
                    row.insert(column, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/// A row position paired with a relevance score (higher is better).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredIndex {
    /// Position of the row within the table for this call.
    pub position: usize,
    /// BM25 score, or the fixed exact-match score after merging.
    pub score: f64,
}

impl ScoredIndex {
    pub fn new(position: usize, score: f64) -> Self {
        Self { position, score }
    }
}

/// Orders scored positions by score descending, ties by ascending position.
pub(crate) fn rank_order(a: &ScoredIndex, b: &ScoredIndex) -> std::cmp::Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Result of searching one of the domain tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Domain id that was searched (resolved by the classifier if not given).
    pub domain: String,
    /// The query exactly as supplied.
    pub query: String,
    /// Source locator of the searched table.
    pub file: String,
    /// Number of rows in `results`.
    pub count: usize,
    /// Ranked rows, projected to the table's output columns.
    pub results: Vec<Row>,
}

/// Result of searching one of the stack guideline tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSearchResponse {
    /// Stack id that was searched.
    pub stack: String,
    /// The query exactly as supplied.
    pub query: String,
    /// Source locator of the searched table.
    pub file: String,
    /// Number of rows in `results`.
    pub count: usize,
    /// Ranked rows, projected to the table's output columns.
    pub results: Vec<Row>,
}
