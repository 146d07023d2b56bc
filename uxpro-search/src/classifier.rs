//! Keyword-voting domain classifier.
//!
//! Picks the table a free-text query most likely targets when the caller does
//! not name one. Each domain gets one vote per keyword that occurs as a raw
//! substring of the lowercased query, so multi-word keywords such as
//! "dark mode" are detected. The table is an ordered list: on a tie the domain
//! declared first wins, and a query with no votes falls back to the default.

use serde::{Deserialize, Serialize};

/// Domain chosen when no keyword matches.
pub const DEFAULT_DOMAIN: &str = "style";

/// Keywords voting for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainKeywords {
    /// Domain id (must match a registry entry to be searchable).
    pub domain: String,
    /// Lowercase substrings that vote for this domain.
    pub keywords: Vec<String>,
}

impl DomainKeywords {
    pub fn new<I, S>(domain: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: domain.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of keywords contained in the already-lowercased `query`.
    fn votes(&self, query_lower: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| query_lower.contains(keyword.as_str()))
            .count()
    }
}

/// Ordered keyword table plus fallback domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainClassifier {
    /// Returned when every domain scores zero.
    pub default_domain: String,
    /// Domains in tie-breaking priority order.
    pub domains: Vec<DomainKeywords>,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DomainClassifier {
    /// Creates a classifier from an explicit ordered table.
    pub fn new(domains: Vec<DomainKeywords>, default_domain: impl Into<String>) -> Self {
        Self {
            domains,
            default_domain: default_domain.into(),
        }
    }

    /// The built-in keyword table for the design knowledge base.
    ///
    /// Declared order (and therefore tie priority): color, chart, landing,
    /// product, prompt, quick, style, ux.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                DomainKeywords::new(
                    "color",
                    [
                        "color", "palette", "hex", "#", "rgb", "financial", "sales", "marketing",
                        "healthcare", "it", "devops", "hr",
                    ],
                ),
                DomainKeywords::new(
                    "chart",
                    [
                        "chart", "graph", "visualization", "trend", "bar", "pie", "scatter",
                        "heatmap", "funnel", "gauge", "line",
                    ],
                ),
                DomainKeywords::new(
                    "landing",
                    [
                        "landing", "page", "cta", "conversion", "hero", "testimonial", "form",
                        "pricing", "section",
                    ],
                ),
                DomainKeywords::new(
                    "product",
                    [
                        "saas", "ecommerce", "e-commerce", "fintech", "healthcare", "gaming",
                        "portfolio", "agency", "crypto", "social", "productivity",
                    ],
                ),
                DomainKeywords::new(
                    "prompt",
                    [
                        "prompt", "css", "implementation", "variable", "checklist", "code",
                        "tailwind", "styled",
                    ],
                ),
                DomainKeywords::new(
                    "quick",
                    ["quick", "summary", "overview", "all styles", "list", "compare"],
                ),
                DomainKeywords::new(
                    "style",
                    [
                        "style", "design", "ui", "minimalism", "glassmorphism", "neumorphism",
                        "brutalism", "dark mode", "flat", "3d", "aurora", "retro",
                    ],
                ),
                DomainKeywords::new(
                    "ux",
                    [
                        "ux", "user experience", "usability", "accessibility", "wcag", "touch",
                        "scroll", "animation", "focus", "keyboard", "screen reader", "loading",
                        "error", "validation", "feedback", "navigation", "mobile", "responsive",
                        "performance", "z-index", "overflow",
                    ],
                ),
            ],
            DEFAULT_DOMAIN,
        )
    }

    /// Per-domain vote counts for `query`, in declared order.
    pub fn votes<'a>(&'a self, query: &str) -> Vec<(&'a str, usize)> {
        let query_lower = query.to_lowercase();
        self.domains
            .iter()
            .map(|entry| (entry.domain.as_str(), entry.votes(&query_lower)))
            .collect()
    }

    /// Returns the domain with the most votes for `query`.
    ///
    /// Ties go to the domain declared first; zero votes everywhere yields
    /// [`default_domain`](Self::default_domain).
    pub fn classify<'a>(&'a self, query: &str) -> &'a str {
        let mut best: Option<(&str, usize)> = None;
        for (domain, votes) in self.votes(query) {
            if votes > best.map_or(0, |(_, v)| v) {
                best = Some((domain, votes));
            }
        }
        match best {
            Some((domain, _)) => domain,
            None => self.default_domain.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> DomainClassifier {
        DomainClassifier::new(
            vec![
                DomainKeywords::new("color", ["palette", "hex"]),
                DomainKeywords::new("style", ["glass", "minimal"]),
                DomainKeywords::new("ux", ["dark mode", "accessibility"]),
            ],
            "style",
        )
    }

    #[test]
    fn multi_word_keywords_vote() {
        let classifier = small_table();
        assert_eq!(classifier.classify("dark mode toggle accessibility"), "ux");
    }

    #[test]
    fn highest_vote_wins() {
        let classifier = small_table();
        assert_eq!(classifier.classify("hex palette for a minimal site"), "color");
    }

    #[test]
    fn tie_goes_to_first_declared_domain() {
        let classifier = small_table();
        // color: "hex" (1), style: "glass" (1)
        assert_eq!(classifier.classify("glass hex"), "color");

        let reversed = DomainClassifier::new(
            classifier.domains.iter().rev().cloned().collect(),
            "style",
        );
        assert_eq!(reversed.classify("glass hex"), "style");
    }

    #[test]
    fn no_votes_falls_back_to_default() {
        let classifier = small_table();
        assert_eq!(classifier.classify("zzz qqq"), "style");
        assert_eq!(classifier.classify(""), "style");
    }

    #[test]
    fn matching_is_case_insensitive_on_query() {
        let classifier = small_table();
        assert_eq!(classifier.classify("DARK MODE"), "ux");
    }

    #[test]
    fn votes_are_reported_in_declared_order() {
        let classifier = small_table();
        let votes = classifier.votes("dark mode palette");
        assert_eq!(votes, [("color", 1), ("style", 0), ("ux", 1)]);
    }

    #[test]
    fn builtin_order_and_default() {
        let classifier = DomainClassifier::builtin();
        let order: Vec<&str> = classifier.domains.iter().map(|d| d.domain.as_str()).collect();
        assert_eq!(
            order,
            ["color", "chart", "landing", "product", "prompt", "quick", "style", "ux"]
        );
        assert_eq!(classifier.default_domain, "style");
    }

    #[test]
    fn builtin_routes_typical_queries() {
        let classifier = DomainClassifier::builtin();
        assert_eq!(classifier.classify("pie chart"), "chart");
        assert_eq!(classifier.classify("glassmorphism"), "style");
        assert_eq!(classifier.classify("keyboard navigation"), "ux");
        assert_eq!(classifier.classify("saas dashboard"), "product");
        assert_eq!(classifier.classify("zzz"), "style");
    }

    #[test]
    fn builtin_substring_votes_are_raw() {
        // "accessibility" contains "it", which votes for color; the tie with
        // style ("dark mode") and ux ("accessibility") goes to color.
        let classifier = DomainClassifier::builtin();
        assert_eq!(classifier.classify("dark mode toggle accessibility"), "color");
    }
}
