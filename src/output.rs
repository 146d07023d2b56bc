//! Rendering of search responses as Markdown or JSON.

use std::fmt::Write as _;

use uxpro_search::{Row, SearchResponse, StackSearchResponse};

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{AppError, Result};

/// Render a domain search response.
///
/// # Errors
///
/// Returns [`AppError::Output`] if JSON serialization fails.
pub fn render_search(response: &SearchResponse, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Json => to_json(response),
        OutputFormat::Markdown => {
            let header = format!("## Domain: {}", response.domain);
            Ok(render_markdown(
                &header,
                &response.query,
                &response.file,
                &response.results,
                config.max_value_chars,
            ))
        }
    }
}

/// Render a stack search response.
///
/// # Errors
///
/// Returns [`AppError::Output`] if JSON serialization fails.
pub fn render_stack(response: &StackSearchResponse, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Json => to_json(response),
        OutputFormat::Markdown => {
            let header = format!("## Stack: {}", response.stack);
            Ok(render_markdown(
                &header,
                &response.query,
                &response.file,
                &response.results,
                config.max_value_chars,
            ))
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Output(e.to_string()))
}

fn render_markdown(
    header: &str,
    query: &str,
    file: &str,
    results: &[Row],
    max_value_chars: usize,
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "**Query:** {query}");
    let _ = writeln!(out, "**Source:** {file} | **Found:** {} results", results.len());

    if results.is_empty() {
        let _ = writeln!(out, "\nNo matching rows.");
        return out;
    }

    for (i, row) in results.iter().enumerate() {
        let _ = writeln!(out, "\n### Result {}", i + 1);
        for (column, value) in row.iter() {
            let _ = writeln!(out, "- **{column}:** {}", truncate(value, max_value_chars));
        }
    }
    out
}

/// Cuts `value` to `max_chars` characters plus `...`; zero means no limit.
fn truncate(value: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return value.to_string();
    }
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &value[..byte_idx]),
        None => value.to_string(),
    }
}
