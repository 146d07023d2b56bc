//! Exact-match booster.
//!
//! Flags rows whose raw search-column values contain the query as a
//! case-insensitive literal substring. These are high-precision hits that the
//! merger places above purely statistical matches.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

use crate::types::Row;

/// Case-insensitive literal matcher for one query.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    pattern: Option<Regex>,
}

impl ExactMatcher {
    /// Builds a matcher for `query`. Regex metacharacters are escaped, so the
    /// query is always matched literally. An empty query matches every value.
    pub fn new(query: &str) -> Self {
        let pattern = match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Some(re),
            Err(err) => {
                // Only reachable when the escaped query exceeds the regex size limit.
                tracing::warn!(error = %err, "exact-match pattern rejected, boosting disabled");
                None
            }
        };
        Self { pattern }
    }

    /// Returns `true` if `text` contains the query.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Returns the positions of rows where any of `search_cols` contains the
    /// query. Scanning a row stops at its first matching column.
    pub fn matching_rows<S: AsRef<str>>(&self, rows: &[Row], search_cols: &[S]) -> BTreeSet<usize> {
        if self.pattern.is_none() {
            return BTreeSet::new();
        }
        rows.iter()
            .enumerate()
            .filter(|(_, row)| {
                search_cols
                    .iter()
                    .filter_map(|col| row.get(col.as_ref()))
                    .any(|value| self.is_match(value))
            })
            .map(|(position, _)| position)
            .collect()
    }
}

/// Convenience wrapper: positions of rows whose search columns contain `query`.
pub fn exact_matches<S: AsRef<str>>(rows: &[Row], query: &str, search_cols: &[S]) -> BTreeSet<usize> {
    ExactMatcher::new(query).matching_rows(rows, search_cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row::from_iter([("Name", "Neon Glow"), ("Notes", "vivid")]),
            Row::from_iter([("Name", "Retro Wave"), ("Notes", "80s synth")]),
            Row::from_iter([("Name", "Minimalist Clean"), ("Notes", "retro-free")]),
        ]
    }

    #[test]
    fn matches_case_insensitively() {
        let hits = exact_matches(&rows(), "RETRO", &["Name"]);
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn any_search_column_can_match() {
        let hits = exact_matches(&rows(), "retro", &["Name", "Notes"]);
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn unlisted_columns_are_ignored() {
        let hits = exact_matches(&rows(), "synth", &["Name"]);
        assert!(hits.is_empty());
    }

    #[test]
    fn metacharacters_match_literally() {
        let rows = vec![
            Row::from_iter([("Code", "a.b(c)")]),
            Row::from_iter([("Code", "axb c")]),
        ];
        let hits = exact_matches(&rows, "a.b(c)", &["Code"]);
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), [0]);

        let hits = exact_matches(&rows, ".*", &["Code"]);
        assert!(hits.is_empty());
    }

    #[test]
    fn substring_spans_punctuation() {
        let hits = exact_matches(&rows(), "retro-free", &["Notes"]);
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn empty_query_matches_every_row() {
        let hits = exact_matches(&rows(), "", &["Name"]);
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), [0, 1, 2]);
        assert!(ExactMatcher::new("").is_match("anything"));
    }

    #[test]
    fn space_query_matches_rows_containing_a_space() {
        let rows = vec![
            Row::from_iter([("Name", "Neon Glow")]),
            Row::from_iter([("Name", "Retro Wave")]),
            Row::from_iter([("Name", "Minimalist")]),
        ];
        let hits = exact_matches(&rows, " ", &["Name"]);
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), [0, 1]);
        assert!(exact_matches(&rows, "   ", &["Name"]).is_empty());
    }

    #[test]
    fn missing_columns_do_not_match() {
        let hits = exact_matches(&rows(), "retro", &["Absent"]);
        assert!(hits.is_empty());
    }
}
