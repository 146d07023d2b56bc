//! Error types for the uxpro application layer.

use uxpro_search::SearchError;

/// Top-level error type for configuration loading and searching.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Search failed (unknown table, unreadable source, invalid ranking config).
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Configuration file could not be parsed or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Output could not be rendered.
    #[error("output error: {0}")]
    Output(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
