//! Integration tests: TOML config + CSV tables on disk + search + rendering.

use std::path::Path;

use uxpro::uxpro_search::SearchError;
use uxpro::{AppConfig, AppError, OutputConfig, OutputFormat};

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create dirs");
    }
    std::fs::write(path, content).expect("write fixture");
}

/// A data directory holding a small styles table and a React stack table.
fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "styles.csv",
        "\
Style Category,Type,Keywords,Best For,Complexity
Glassmorphism,General,\"frosted glass, blur, transparency\",\"SaaS, dashboards\",Medium
Brutalism,General,\"raw, bold, stark\",\"portfolios, editorial\",Low
Retro Futurism,Thematic,\"neon, synthwave, glow\",\"gaming, music\",High
Flat Design,General,\"simple, clean, minimal\",\"mobile apps, dashboards\",Low
",
    );
    write(
        dir.path(),
        "stacks/react.csv",
        "\
Category,Guideline,Description,Do,Don't,Severity
State,Lift state up,Share state through the closest common parent,Lift shared state,Duplicate state,High
Performance,Memoize expensive renders,Avoid recomputing heavy trees,Use useMemo,Memoize everything,Medium
",
    );
    dir
}

fn config_for(data_dir: &Path) -> AppConfig {
    AppConfig {
        data_dir: data_dir.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn searches_builtin_style_table_from_csv() {
    let data = fixture();
    let searcher = uxpro::searcher_from_config(&config_for(data.path())).expect("searcher");

    let response = searcher
        .search("glassmorphism", Some("style"), None)
        .expect("search");
    assert_eq!(response.file, "styles.csv");
    assert_eq!(response.count, 1);
    let row = &response.results[0];
    assert_eq!(row.get("Style Category"), Some("Glassmorphism"));
    // Output columns of the built-in style table that the CSV lacks are omitted.
    assert_eq!(row.get("Primary Colors"), None);
    assert_eq!(row.get("Complexity"), Some("Medium"));
}

#[test]
fn detected_domain_is_searched() {
    let data = fixture();
    let searcher = uxpro::searcher_from_config(&config_for(data.path())).expect("searcher");

    let response = searcher.search("brutalism", None, None).expect("search");
    assert_eq!(response.domain, "style");
    assert_eq!(response.results[0].get("Style Category"), Some("Brutalism"));
}

#[test]
fn dashboards_query_ranks_by_bm25() {
    let data = fixture();
    let searcher = uxpro::searcher_from_config(&config_for(data.path())).expect("searcher");

    let response = searcher
        .search("dashboards for mobile", Some("style"), Some(5))
        .expect("search");
    // Flat Design mentions both "mobile" and "dashboards"; Glassmorphism only one.
    assert_eq!(response.count, 2);
    assert_eq!(response.results[0].get("Style Category"), Some("Flat Design"));
    assert_eq!(response.results[1].get("Style Category"), Some("Glassmorphism"));
}

#[test]
fn stack_search_reads_nested_file() {
    let data = fixture();
    let searcher = uxpro::searcher_from_config(&config_for(data.path())).expect("searcher");

    let response = searcher
        .search_stack("memoize", "react", Some(3))
        .expect("search");
    assert_eq!(response.stack, "react");
    assert_eq!(response.file, "stacks/react.csv");
    assert_eq!(response.count, 1);
    assert_eq!(
        response.results[0].get("Guideline"),
        Some("Memoize expensive renders")
    );
    assert_eq!(response.results[0].get("Severity"), Some("Medium"));
}

#[test]
fn configured_table_without_file_is_unavailable() {
    let data = fixture();
    let searcher = uxpro::searcher_from_config(&config_for(data.path())).expect("searcher");

    let err = searcher.search("serif", Some("typography"), None).unwrap_err();
    match err {
        SearchError::SourceUnavailable { table, locator, .. } => {
            assert_eq!(table, "typography");
            assert_eq!(locator, "typography.csv");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_stack_names_valid_ids() {
    let data = fixture();
    let searcher = uxpro::searcher_from_config(&config_for(data.path())).expect("searcher");

    let err = searcher.search_stack("state", "angular", None).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown stack: angular"));
    assert!(message.contains("html-tailwind"));
    assert!(message.contains("flutter"));
}

#[test]
fn toml_config_drives_registry_and_limits() {
    let data = fixture();
    let config_dir = tempfile::tempdir().expect("tempdir");
    let config_path = config_dir.path().join("config.toml");
    let toml = format!(
        r#"
data_dir = "{}"

[search]
max_results = 1

[output]
format = "json"

[[registry.domains]]
id = "looks"
file = "styles.csv"
search_cols = ["Keywords", "Best For"]
output_cols = ["Style Category"]

[classifier]
default_domain = "looks"
domains = []
"#,
        data.path().display().to_string().replace('\\', "\\\\")
    );
    std::fs::write(&config_path, toml).expect("write config");

    let config = AppConfig::load(Some(&config_path)).expect("load config");
    assert_eq!(config.output.format, OutputFormat::Json);

    let searcher = uxpro::searcher_from_config(&config).expect("searcher");
    let response = searcher.search("dashboards", None, None).expect("search");
    assert_eq!(response.domain, "looks");
    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].len(), 1);

    let rendered = uxpro::output::render_search(&response, &config.output).expect("render");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("json output");
    assert_eq!(value["domain"], "looks");
    assert_eq!(value["count"], 1);
}

#[test]
fn markdown_rendering_of_csv_results() {
    let data = fixture();
    let searcher = uxpro::searcher_from_config(&config_for(data.path())).expect("searcher");
    let response = searcher.search("neon", Some("style"), None).expect("search");

    let rendered = uxpro::output::render_search(
        &response,
        &OutputConfig {
            format: OutputFormat::Markdown,
            max_value_chars: 10,
        },
    )
    .expect("render");
    assert!(rendered.contains("## Domain: style"));
    assert!(rendered.contains("- **Style Category:** Retro Futu..."));
}

#[test]
fn invalid_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[search]\nk1 = \"fast\"\n").expect("write");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(AppError::Config(_))
    ));
}
