//! # uxpro-search
//!
//! Ranking engine for small tabular design knowledge bases: styles, color
//! palettes, chart types, landing patterns, UX guidelines and per-stack
//! coding guidelines.
//!
//! ## Design
//!
//! - BM25 scoring over the concatenated search columns of each row
//! - Case-insensitive literal substring matches are boosted above BM25 hits
//! - Keyword voting picks the table when the caller does not name one
//! - The index is rebuilt on every call; no state survives between searches
//! - Only configured output columns are returned
//!
//! ## Example
//!
//! ```
//! use uxpro_search::{Row, SearchConfig};
//!
//! let rows = vec![
//!     Row::from_iter([("Name", "Neon Glow")]),
//!     Row::from_iter([("Name", "Retro Wave")]),
//! ];
//! let ranked = uxpro_search::rank(&rows, &["Name"], "retro", &SearchConfig::default());
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].position, 1);
//! ```

pub mod bm25;
pub mod booster;
pub mod classifier;
pub mod config;
pub mod error;
pub mod merge;
pub mod orchestrator;
pub mod registry;
pub mod source;
pub mod sources;
pub mod tokenizer;
pub mod types;

pub use bm25::Bm25Index;
pub use classifier::{DomainClassifier, DomainKeywords};
pub use config::SearchConfig;
pub use error::{Result, SearchError, SourceError};
pub use orchestrator::search::Searcher;
pub use registry::{Registry, TableConfig};
pub use source::TableSource;
pub use sources::{CsvTableSource, MemoryTableSource};
pub use tokenizer::tokenize;
pub use types::{Row, ScoredIndex, SearchResponse, StackSearchResponse};

/// Rank in-memory rows against a query.
///
/// Scores the concatenated `search_cols` of every row with BM25, boosts rows
/// containing the query verbatim, and returns at most `config.max_results`
/// positions in descending score order. Rows that neither match exactly nor
/// score above zero are left out.
pub fn rank<S: AsRef<str>>(
    rows: &[Row],
    search_cols: &[S],
    query: &str,
    config: &SearchConfig,
) -> Vec<ScoredIndex> {
    orchestrator::rank::rank_rows(rows, search_cols, query, config, config.max_results)
}
