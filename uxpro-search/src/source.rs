//! Trait definition for pluggable table sources.
//!
//! A [`TableSource`] turns a registry locator (e.g. `"styles.csv"`) into the
//! table's rows. The ranking core never reads storage itself.

use crate::error::SourceError;
use crate::types::Row;

/// A backend that loads the rows of one table.
///
/// Implementors must return rows in a stable order: row positions are the
/// join key between scoring and projection within one search call.
pub trait TableSource {
    /// Load every row stored at `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Missing`] if nothing exists at `locator`, or
    /// another [`SourceError`] if the data cannot be read.
    fn load(&self, locator: &str) -> Result<Vec<Row>, SourceError>;
}

impl<T: TableSource + ?Sized> TableSource for &T {
    fn load(&self, locator: &str) -> Result<Vec<Row>, SourceError> {
        (**self).load(locator)
    }
}

impl<T: TableSource + ?Sized> TableSource for Box<T> {
    fn load(&self, locator: &str) -> Result<Vec<Row>, SourceError> {
        (**self).load(locator)
    }
}
