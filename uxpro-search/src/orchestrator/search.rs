//! Table-level search entry points.
//!
//! A [`Searcher`] owns the immutable registry, classifier and ranking
//! configuration plus a [`TableSource`]. Every call loads the table, ranks it
//! with a freshly built index and projects the winning rows; no state is kept
//! between calls.

use crate::classifier::DomainClassifier;
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::registry::{Registry, TableConfig};
use crate::source::TableSource;
use crate::types::{Row, SearchResponse, StackSearchResponse};

use super::rank::{project, rank_rows};

/// Searches the domain and stack tables of a knowledge base.
#[derive(Debug, Clone)]
pub struct Searcher<S> {
    source: S,
    registry: Registry,
    classifier: DomainClassifier,
    config: SearchConfig,
}

impl<S: TableSource> Searcher<S> {
    /// Creates a searcher with the built-in registry, classifier and defaults.
    pub fn new(source: S) -> Self {
        Self {
            source,
            registry: Registry::builtin(),
            classifier: DomainClassifier::builtin(),
            config: SearchConfig::default(),
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: DomainClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replaces the ranking configuration after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` fails validation.
    pub fn with_config(mut self, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn classifier(&self) -> &DomainClassifier {
        &self.classifier
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Picks the domain table a query most likely targets.
    pub fn detect_domain(&self, query: &str) -> &str {
        self.classifier.classify(query)
    }

    /// Search a domain table.
    ///
    /// When `domain` is `None` the classifier picks one. `max_results`
    /// defaults to the configured value; zero yields an empty response.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownDomain`] if the (given or detected)
    /// domain has no registry entry, or [`SearchError::SourceUnavailable`]
    /// if its rows cannot be loaded.
    pub fn search(
        &self,
        query: &str,
        domain: Option<&str>,
        max_results: Option<usize>,
    ) -> Result<SearchResponse> {
        let domain = match domain {
            Some(domain) => domain,
            None => {
                let detected = self.detect_domain(query);
                tracing::debug!(domain = detected, "detected domain");
                detected
            }
        };
        let table = self
            .registry
            .domain(domain)
            .ok_or_else(|| SearchError::UnknownDomain {
                id: domain.to_string(),
                available: self.registry.domain_ids(),
            })?;

        let results = self.search_table(table, query, max_results)?;
        Ok(SearchResponse {
            domain: table.id.clone(),
            query: query.to_string(),
            file: table.file.clone(),
            count: results.len(),
            results,
        })
    }

    /// Search a stack guideline table.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStack`] (listing the valid stack ids) if
    /// `stack` has no registry entry, or [`SearchError::SourceUnavailable`]
    /// if its rows cannot be loaded.
    pub fn search_stack(
        &self,
        query: &str,
        stack: &str,
        max_results: Option<usize>,
    ) -> Result<StackSearchResponse> {
        let table = self
            .registry
            .stack(stack)
            .ok_or_else(|| SearchError::UnknownStack {
                id: stack.to_string(),
                available: self.registry.stack_ids(),
            })?;

        let results = self.search_table(table, query, max_results)?;
        Ok(StackSearchResponse {
            stack: table.id.clone(),
            query: query.to_string(),
            file: table.file.clone(),
            count: results.len(),
            results,
        })
    }

    /// Load, rank and project one configured table.
    fn search_table(
        &self,
        table: &TableConfig,
        query: &str,
        max_results: Option<usize>,
    ) -> Result<Vec<Row>> {
        let max_results = max_results.unwrap_or(self.config.max_results);
        tracing::trace!(table = %table.id, query, max_results, "searching table");

        let rows = self.source.load(&table.file).map_err(|source| {
            tracing::warn!(table = %table.id, locator = %table.file, error = %source, "table source failed");
            SearchError::SourceUnavailable {
                table: table.id.clone(),
                locator: table.file.clone(),
                source,
            }
        })?;

        let ranked = rank_rows(&rows, &table.search_cols, query, &self.config, max_results);
        Ok(project(&rows, &ranked, &table.output_cols))
    }
}
