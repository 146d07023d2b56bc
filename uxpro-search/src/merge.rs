//! Result merging: exact matches first, then positive BM25 scores.
//!
//! Admission rules:
//! 1. every exact match enters with the fixed exact-match score
//! 2. in BM25 order, every unseen row with a score strictly above zero
//!
//! The merged list is then explicitly sorted (score descending, ties by
//! ascending position) and truncated to the requested maximum.

use std::collections::{BTreeSet, HashSet};

use crate::types::{rank_order, ScoredIndex};

/// Merge exact-match positions and BM25 scores into one ranked list.
///
/// `exact_score` is the admission score for exact matches (150 with the
/// default [`SearchConfig`](crate::SearchConfig)).
pub fn merge(
    exact: &BTreeSet<usize>,
    bm25: &[ScoredIndex],
    exact_score: f64,
    max_results: usize,
) -> Vec<ScoredIndex> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<usize> = HashSet::with_capacity(exact.len() + bm25.len());
    let mut merged: Vec<ScoredIndex> = Vec::with_capacity(exact.len() + bm25.len());

    for &position in exact {
        if seen.insert(position) {
            merged.push(ScoredIndex::new(position, exact_score));
        }
    }

    for scored in bm25 {
        if scored.score > 0.0 && seen.insert(scored.position) {
            merged.push(*scored);
        }
    }

    merged.sort_by(rank_order);
    merged.truncate(max_results);
    merged
}
