//! Table registry: which tables exist, where their rows come from, and which
//! columns are searched and returned.
//!
//! The registry is static, declarative configuration. Build it once at
//! start-up ([`Registry::builtin`] or deserialized from a config file) and
//! share it read-only.

use serde::{Deserialize, Serialize};

/// Search and output configuration for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table id (domain name or stack name).
    pub id: String,
    /// Source locator, relative to the table source's root.
    pub file: String,
    /// Columns concatenated into the scored document and matched exactly.
    pub search_cols: Vec<String>,
    /// Columns kept when projecting result rows.
    pub output_cols: Vec<String>,
}

impl TableConfig {
    pub fn new<S, O>(
        id: impl Into<String>,
        file: impl Into<String>,
        search_cols: impl IntoIterator<Item = S>,
        output_cols: impl IntoIterator<Item = O>,
    ) -> Self
    where
        S: Into<String>,
        O: Into<String>,
    {
        Self {
            id: id.into(),
            file: file.into(),
            search_cols: search_cols.into_iter().map(Into::into).collect(),
            output_cols: output_cols.into_iter().map(Into::into).collect(),
        }
    }
}

/// The two table families: design domains and per-stack guidelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registry {
    /// Domain tables, in declared order.
    pub domains: Vec<TableConfig>,
    /// Stack guideline tables, in declared order.
    pub stacks: Vec<TableConfig>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

const STACK_SEARCH_COLS: [&str; 5] = ["Category", "Guideline", "Description", "Do", "Don't"];
const STACK_OUTPUT_COLS: [&str; 9] = [
    "Category",
    "Guideline",
    "Description",
    "Do",
    "Don't",
    "Code Good",
    "Code Bad",
    "Severity",
    "Docs URL",
];

impl Registry {
    /// Creates a registry from explicit table lists.
    pub fn new(domains: Vec<TableConfig>, stacks: Vec<TableConfig>) -> Self {
        Self { domains, stacks }
    }

    /// Looks up a domain table.
    pub fn domain(&self, id: &str) -> Option<&TableConfig> {
        self.domains.iter().find(|t| t.id == id)
    }

    /// Looks up a stack table.
    pub fn stack(&self, id: &str) -> Option<&TableConfig> {
        self.stacks.iter().find(|t| t.id == id)
    }

    /// Domain ids in declared order.
    pub fn domain_ids(&self) -> Vec<String> {
        self.domains.iter().map(|t| t.id.clone()).collect()
    }

    /// Stack ids in declared order.
    pub fn stack_ids(&self) -> Vec<String> {
        self.stacks.iter().map(|t| t.id.clone()).collect()
    }

    /// The built-in design knowledge base layout.
    pub fn builtin() -> Self {
        let domains = vec![
            TableConfig::new(
                "style",
                "styles.csv",
                ["Style Category", "Keywords", "Best For", "Type"],
                [
                    "Style Category",
                    "Type",
                    "Keywords",
                    "Primary Colors",
                    "Effects & Animation",
                    "Best For",
                    "Performance",
                    "Accessibility",
                    "Framework Compatibility",
                    "Complexity",
                ],
            ),
            TableConfig::new(
                "prompt",
                "prompts.csv",
                [
                    "Style Category",
                    "AI Prompt Keywords (Copy-Paste Ready)",
                    "CSS/Technical Keywords",
                ],
                [
                    "Style Category",
                    "AI Prompt Keywords (Copy-Paste Ready)",
                    "CSS/Technical Keywords",
                    "Implementation Checklist",
                ],
            ),
            TableConfig::new(
                "color",
                "colors.csv",
                ["Product Type", "Keywords", "Notes"],
                [
                    "Product Type",
                    "Keywords",
                    "Primary (Hex)",
                    "Secondary (Hex)",
                    "CTA (Hex)",
                    "Background (Hex)",
                    "Text (Hex)",
                    "Border (Hex)",
                    "Notes",
                ],
            ),
            TableConfig::new(
                "chart",
                "charts.csv",
                ["Data Type", "Keywords", "Best Chart Type", "Accessibility Notes"],
                [
                    "Data Type",
                    "Keywords",
                    "Best Chart Type",
                    "Secondary Options",
                    "Color Guidance",
                    "Accessibility Notes",
                    "Library Recommendation",
                    "Interactive Level",
                ],
            ),
            TableConfig::new(
                "landing",
                "landing.csv",
                ["Pattern Name", "Keywords", "Conversion Optimization", "Section Order"],
                [
                    "Pattern Name",
                    "Keywords",
                    "Section Order",
                    "Primary CTA Placement",
                    "Color Strategy",
                    "Conversion Optimization",
                ],
            ),
            TableConfig::new(
                "product",
                "products.csv",
                [
                    "Product Type",
                    "Keywords",
                    "Primary Style Recommendation",
                    "Key Considerations",
                ],
                [
                    "Product Type",
                    "Keywords",
                    "Primary Style Recommendation",
                    "Secondary Styles",
                    "Landing Page Pattern",
                    "Dashboard Style (if applicable)",
                    "Color Palette Focus",
                ],
            ),
            TableConfig::new(
                "quick",
                "quick-ref.csv",
                ["Style Name", "Best For", "Category"],
                [
                    "Style Name",
                    "Type",
                    "Best For",
                    "Primary Colors",
                    "Performance",
                    "Accessibility",
                    "Mobile",
                    "Dark Mode",
                ],
            ),
            TableConfig::new(
                "ux",
                "ux-guidelines.csv",
                ["Category", "Issue", "Description", "Platform"],
                [
                    "Category",
                    "Issue",
                    "Platform",
                    "Description",
                    "Do",
                    "Don't",
                    "Code Example Good",
                    "Code Example Bad",
                    "Severity",
                ],
            ),
            TableConfig::new(
                "typography",
                "typography.csv",
                [
                    "Font Pairing Name",
                    "Category",
                    "Mood/Style Keywords",
                    "Best For",
                    "Heading Font",
                    "Body Font",
                ],
                [
                    "Font Pairing Name",
                    "Category",
                    "Heading Font",
                    "Body Font",
                    "Mood/Style Keywords",
                    "Best For",
                    "Google Fonts URL",
                    "CSS Import",
                    "Tailwind Config",
                    "Notes",
                ],
            ),
        ];

        let stacks = [
            "html-tailwind",
            "react",
            "nextjs",
            "vue",
            "svelte",
            "swiftui",
            "react-native",
            "flutter",
        ]
        .into_iter()
        .map(|stack| {
            TableConfig::new(
                stack,
                format!("stacks/{stack}.csv"),
                STACK_SEARCH_COLS,
                STACK_OUTPUT_COLS,
            )
        })
        .collect();

        Self::new(domains, stacks)
    }
}
