//! Ranking configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the BM25 saturation and length-normalisation
//! parameters, the fixed score given to exact substring matches, and the
//! default result count. The defaults reproduce the reference ranking.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default number of rows returned per search.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Configuration for one search call.
///
/// Use [`Default::default()`] for the reference behaviour, or construct with
/// field overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of rows to return after merging. Zero is allowed and
    /// always yields an empty result.
    pub max_results: usize,
    /// BM25 term-frequency saturation.
    pub k1: f64,
    /// BM25 document-length normalisation, within `[0, 1]`.
    pub b: f64,
    /// Base score of a row whose search columns contain the raw query.
    pub exact_match_score: f64,
    /// Bonus added on top of `exact_match_score` when merging.
    pub exact_match_bonus: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            k1: 1.5,
            b: 0.75,
            exact_match_score: 100.0,
            exact_match_bonus: 50.0,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `k1` must be finite and non-negative
    /// - `b` must be within `[0, 1]`
    /// - `exact_match_score` and `exact_match_bonus` must be finite
    /// - their sum must be positive
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(SearchError::Config(
                "k1 must be a finite, non-negative number".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(SearchError::Config("b must be within [0, 1]".into()));
        }
        if !self.exact_match_score.is_finite() || !self.exact_match_bonus.is_finite() {
            return Err(SearchError::Config(
                "exact_match_score and exact_match_bonus must be finite".into(),
            ));
        }
        if self.exact_admission_score() <= 0.0 {
            return Err(SearchError::Config(
                "exact_match_score + exact_match_bonus must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Score assigned to exact matches when merging.
    pub fn exact_admission_score(&self) -> f64 {
        self.exact_match_score + self.exact_match_bonus
    }
}
