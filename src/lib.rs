//! uxpro: search design knowledge bases from the command line or as a library.
//!
//! This crate wires the [`uxpro_search`] ranking engine to CSV tables on disk:
//! - **Config**: TOML file with data directory, ranking parameters, table
//!   registry and classifier keywords
//! - **Source**: CSV files resolved under the configured data directory
//! - **Output**: Markdown or JSON rendering of ranked rows

pub mod app_dirs;
pub mod config;
pub mod error;
pub mod output;

pub use config::{AppConfig, OutputConfig, OutputFormat};
pub use error::{AppError, Result};
pub use uxpro_search;

use uxpro_search::{CsvTableSource, Searcher};

/// Build a CSV-backed searcher from `config`.
///
/// # Errors
///
/// Returns an error if the ranking parameters are invalid.
pub fn searcher_from_config(config: &AppConfig) -> Result<Searcher<CsvTableSource>> {
    let searcher = Searcher::new(CsvTableSource::new(&config.data_dir))
        .with_registry(config.registry.clone())
        .with_classifier(config.classifier.clone())
        .with_config(config.search.clone())?;
    Ok(searcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn searcher_uses_config_tables() {
        let config = AppConfig::default();
        let searcher = searcher_from_config(&config).expect("valid config");
        assert_eq!(searcher.registry(), &config.registry);
        assert_eq!(searcher.config().max_results, 5);
    }

    #[test]
    fn invalid_ranking_config_is_rejected() {
        let mut config = AppConfig::default();
        config.search.k1 = -1.0;
        assert!(searcher_from_config(&config).is_err());
    }
}
