//! Table source implementations.
//!
//! Each module provides a struct implementing [`crate::source::TableSource`].

pub mod csv;
pub mod memory;

pub use self::csv::CsvTableSource;
pub use self::memory::MemoryTableSource;
