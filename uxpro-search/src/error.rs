//! Error types for the uxpro-search crate.
//!
//! Only the orchestrator boundary produces errors. The tokenizer, BM25 index,
//! exact-match booster and merger are total functions and degrade to empty
//! results on empty input.

/// Errors that can occur while resolving and searching a table.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The requested domain table has no registry entry.
    #[error("unknown domain: {id}. Available: {}", available.join(", "))]
    UnknownDomain {
        /// The id the caller asked for.
        id: String,
        /// Every domain id the registry knows about, in declared order.
        available: Vec<String>,
    },

    /// The requested stack table has no registry entry.
    #[error("unknown stack: {id}. Available: {}", available.join(", "))]
    UnknownStack {
        /// The id the caller asked for.
        id: String,
        /// Every stack id the registry knows about, in declared order.
        available: Vec<String>,
    },

    /// The table is configured but its backing source could not be read.
    #[error("source unavailable for {table} ({locator}): {source}")]
    SourceUnavailable {
        /// Domain or stack id being searched.
        table: String,
        /// Source locator from the registry (file name relative to the data dir).
        locator: String,
        /// Underlying source failure.
        #[source]
        source: SourceError,
    },

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Failures reported by a [`TableSource`](crate::source::TableSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Nothing exists at the locator.
    #[error("not found: {0}")]
    Missing(String),

    /// The backing file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SearchError {
    /// Returns `true` for the configuration-not-found family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownDomain { .. } | Self::UnknownStack { .. })
    }
}

/// Convenience type alias for uxpro-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
