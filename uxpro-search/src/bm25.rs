//! BM25 Okapi index scoped to a single search call.
//!
//! [`Bm25Index::fit`] computes corpus statistics (document lengths, average
//! length, document frequencies, idf) from scratch; nothing carries over from
//! a previous fit. [`Bm25Index::score`] scores every document, zero-score
//! documents included, so the caller decides what to filter.

use std::collections::HashMap;

use crate::tokenizer::tokenize;
use crate::types::{rank_order, ScoredIndex};

/// Default term-frequency saturation.
pub const DEFAULT_K1: f64 = 1.5;
/// Default document-length normalisation.
pub const DEFAULT_B: f64 = 0.75;

/// Per-call BM25 statistics over a small corpus.
#[derive(Debug, Clone)]
pub struct Bm25Index {
    k1: f64,
    b: f64,
    /// Term frequencies per document, by row position.
    term_freqs: Vec<HashMap<String, usize>>,
    doc_lengths: Vec<usize>,
    avgdl: f64,
    /// term → number of documents containing it at least once
    doc_freqs: HashMap<String, usize>,
    idf: HashMap<String, f64>,
}

impl Default for Bm25Index {
    fn default() -> Self {
        Self::with_params(DEFAULT_K1, DEFAULT_B)
    }
}

impl Bm25Index {
    /// Creates an empty index with the default `k1` and `b`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with custom parameters.
    pub fn with_params(k1: f64, b: f64) -> Self {
        Self {
            k1,
            b,
            term_freqs: Vec::new(),
            doc_lengths: Vec::new(),
            avgdl: 0.0,
            doc_freqs: HashMap::new(),
            idf: HashMap::new(),
        }
    }

    /// Builds the index from `documents`, replacing any previous statistics.
    pub fn fit<I, S>(&mut self, documents: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.term_freqs.clear();
        self.doc_lengths.clear();
        self.doc_freqs.clear();
        self.idf.clear();
        self.avgdl = 0.0;

        for doc in documents {
            let tokens = tokenize(doc.as_ref());
            self.doc_lengths.push(tokens.len());

            let mut tf_map: HashMap<String, usize> = HashMap::new();
            for token in tokens {
                *tf_map.entry(token).or_insert(0) += 1;
            }
            // Keys are distinct, so each term counts once per document.
            for term in tf_map.keys() {
                *self.doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }
            self.term_freqs.push(tf_map);
        }

        let n = self.doc_lengths.len();
        if n == 0 {
            return;
        }
        let total: usize = self.doc_lengths.iter().sum();
        self.avgdl = total as f64 / n as f64;

        let n = n as f64;
        for (term, &df) in &self.doc_freqs {
            let df = df as f64;
            // IDF: ln((N - df + 0.5) / (df + 0.5) + 1)
            let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
            self.idf.insert(term.clone(), idf);
        }
    }

    /// Scores every document against `query`.
    ///
    /// Returns one entry per document sorted by score descending, ties by
    /// ascending row position. Query terms never seen in the corpus add
    /// nothing; repeated query terms add their contribution again.
    pub fn score(&self, query: &str) -> Vec<ScoredIndex> {
        if self.is_empty() {
            return Vec::new();
        }
        let query_terms = tokenize(query);

        let mut scores: Vec<ScoredIndex> = self
            .term_freqs
            .iter()
            .zip(&self.doc_lengths)
            .enumerate()
            .map(|(position, (tf_map, &doc_len))| {
                let score = query_terms
                    .iter()
                    .filter_map(|term| {
                        let idf = *self.idf.get(term)?;
                        let tf = *tf_map.get(term)?;
                        Some(self.term_score(idf, tf, doc_len))
                    })
                    .sum();
                ScoredIndex::new(position, score)
            })
            .collect();

        scores.sort_by(rank_order);
        scores
    }

    fn term_score(&self, idf: f64, tf: usize, doc_len: usize) -> f64 {
        let tf = tf as f64;
        let length_ratio = if self.avgdl > 0.0 {
            doc_len as f64 / self.avgdl
        } else {
            0.0
        };
        let numerator = tf * (self.k1 + 1.0);
        let denominator = tf + self.k1 * (1.0 - self.b + self.b * length_ratio);
        idf * numerator / denominator
    }

    /// Number of documents in the fitted corpus.
    pub fn len(&self) -> usize {
        self.doc_lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_lengths.is_empty()
    }

    /// Average document length in terms (0 for an empty corpus).
    pub fn avgdl(&self) -> f64 {
        self.avgdl
    }

    /// Number of documents containing `term`, if it was observed.
    pub fn doc_freq(&self, term: &str) -> Option<usize> {
        self.doc_freqs.get(term).copied()
    }

    /// Inverse document frequency of `term`, if it was observed.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Token count of the document at `position`.
    pub fn doc_len(&self, position: usize) -> Option<usize> {
        self.doc_lengths.get(position).copied()
    }
}
