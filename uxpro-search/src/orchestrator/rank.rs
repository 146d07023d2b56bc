//! Ranking pipeline over one table's rows.
//!
//! Builds one document per row from the search columns, fits a fresh BM25
//! index, flags exact substring matches, and merges both signals into a
//! truncated ranked list. Nothing survives the call.

use crate::bm25::Bm25Index;
use crate::booster::exact_matches;
use crate::config::SearchConfig;
use crate::merge::merge;
use crate::types::{Row, ScoredIndex};

/// Joins each row's search-column values with a space.
///
/// A column the row lacks contributes an empty string, so documents stay
/// aligned with rows by position.
pub fn build_documents<S: AsRef<str>>(rows: &[Row], search_cols: &[S]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            search_cols
                .iter()
                .map(|col| row.get(col.as_ref()).unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Ranks `rows` against `query`, returning at most `max_results` positions.
///
/// # Pipeline
///
/// 1. Build documents from `search_cols`
/// 2. Fit BM25 over the documents and score the query
/// 3. Find rows whose raw search values contain the query
/// 4. Merge: exact matches first, then positive BM25 scores; sort; truncate
pub fn rank_rows<S: AsRef<str>>(
    rows: &[Row],
    search_cols: &[S],
    query: &str,
    config: &SearchConfig,
    max_results: usize,
) -> Vec<ScoredIndex> {
    if rows.is_empty() || max_results == 0 {
        return Vec::new();
    }

    // 1-2. Statistical relevance.
    let documents = build_documents(rows, search_cols);
    let mut index = Bm25Index::with_params(config.k1, config.b);
    index.fit(&documents);
    let bm25 = index.score(query);

    // 3. High-precision literal hits.
    let exact = exact_matches(rows, query, search_cols);

    // 4. Merge.
    let ranked = merge(&exact, &bm25, config.exact_admission_score(), max_results);

    tracing::debug!(
        rows = rows.len(),
        exact = exact.len(),
        positive_bm25 = bm25.iter().filter(|s| s.score > 0.0).count(),
        returned = ranked.len(),
        "ranked table"
    );
    ranked
}

/// Projects the ranked rows to `output_cols`, preserving rank order.
pub fn project<S: AsRef<str>>(rows: &[Row], ranked: &[ScoredIndex], output_cols: &[S]) -> Vec<Row> {
    ranked
        .iter()
        .filter_map(|scored| rows.get(scored.position))
        .map(|row| row.project(output_cols))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_rows(names: &[&str]) -> Vec<Row> {
        names
            .iter()
            .map(|name| Row::from_iter([("Name", *name), ("Extra", "x")]))
            .collect()
    }

    #[test]
    fn documents_join_search_columns() {
        let rows = vec![
            Row::from_iter([("A", "one"), ("B", "two"), ("C", "three")]),
            Row::from_iter([("A", "four")]),
        ];
        let docs = build_documents(&rows, &["A", "C"]);
        assert_eq!(docs, ["one three", "four "]);
    }

    #[test]
    fn retro_returns_single_exact_match() {
        let rows = name_rows(&["Neon Glow", "Retro Wave", "Minimalist Clean"]);
        let ranked = rank_rows(&rows, &["Name"], "retro", &SearchConfig::default(), 2);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].position, 1);
        assert!((ranked[0].score - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exact_match_beats_higher_bm25() {
        // Row 0 contains the literal phrase; row 1 repeats both terms but
        // never as the exact phrase, giving it the higher BM25 score.
        let rows = name_rows(&[
            "soft shadow card",
            "shadow shadow soft soft layered",
            "plain text",
        ]);
        let config = SearchConfig::default();

        let mut index = Bm25Index::new();
        index.fit(build_documents(&rows, &["Name"]));
        let bm25 = index.score("soft shadow");
        assert_eq!(bm25[0].position, 1, "row 1 should lead on BM25 alone");

        let ranked = rank_rows(&rows, &["Name"], "soft shadow", &config, 5);
        let positions: Vec<usize> = ranked.iter().map(|s| s.position).collect();
        assert_eq!(positions, [0, 1]);
    }

    #[test]
    fn zero_max_results_is_empty() {
        let rows = name_rows(&["Retro Wave"]);
        assert!(rank_rows(&rows, &["Name"], "retro", &SearchConfig::default(), 0).is_empty());
    }

    #[test]
    fn empty_table_is_empty() {
        assert!(rank_rows(&[], &["Name"], "retro", &SearchConfig::default(), 5).is_empty());
    }

    #[test]
    fn custom_exact_score_is_used() {
        let rows = name_rows(&["Retro Wave"]);
        let config = SearchConfig {
            exact_match_score: 10.0,
            exact_match_bonus: 1.0,
            ..Default::default()
        };
        let ranked = rank_rows(&rows, &["Name"], "retro", &config, 5);
        assert!((ranked[0].score - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn projection_follows_rank_order() {
        let rows = name_rows(&["a", "b", "c"]);
        let ranked = vec![ScoredIndex::new(2, 3.0), ScoredIndex::new(0, 1.0)];
        let projected = project(&rows, &ranked, &["Name", "Missing"]);
        assert_eq!(projected.len(), 2);
        assert_eq!(projected[0].get("Name"), Some("c"));
        assert_eq!(projected[0].len(), 1);
        assert_eq!(projected[1].get("Name"), Some("a"));
    }
}
