//! CLI binary for uxpro.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uxpro::{AppConfig, OutputFormat};

/// uxpro: search design styles, palettes, UX and stack guidelines.
#[derive(Parser)]
#[command(name = "uxpro", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, env = "UXPRO_CONFIG")]
    config: Option<PathBuf>,

    /// Directory containing the CSV tables (overrides the config file).
    #[arg(long, env = "UXPRO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log pipeline details to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Search a domain table (auto-detected when --domain is omitted) or a stack table.
    Search {
        /// Free-text query.
        query: String,

        /// Domain table to search.
        #[arg(short, long, conflicts_with = "stack")]
        domain: Option<String>,

        /// Stack guideline table to search.
        #[arg(short, long)]
        stack: Option<String>,

        /// Maximum number of results.
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// Print JSON instead of Markdown.
        #[arg(long)]
        json: bool,
    },

    /// Show which domain a query would be routed to.
    Detect {
        /// Free-text query.
        query: String,
    },

    /// List domain tables.
    Domains,

    /// List stack tables.
    Stacks,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only results.
    let default_filter = if cli.verbose {
        "uxpro=debug,uxpro_search=debug"
    } else {
        "uxpro=info,uxpro_search=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    match cli.command {
        Command::Search {
            query,
            domain,
            stack,
            max_results,
            json,
        } => {
            if json {
                config.output.format = OutputFormat::Json;
            }
            run_search(&config, &query, domain.as_deref(), stack.as_deref(), max_results)
        }
        Command::Detect { query } => {
            detect(&config, &query);
            Ok(())
        }
        Command::Domains => {
            for table in &config.registry.domains {
                println!("{:<12} {}", table.id, table.file);
            }
            Ok(())
        }
        Command::Stacks => {
            for table in &config.registry.stacks {
                println!("{:<14} {}", table.id, table.file);
            }
            Ok(())
        }
    }
}

fn run_search(
    config: &AppConfig,
    query: &str,
    domain: Option<&str>,
    stack: Option<&str>,
    max_results: Option<usize>,
) -> anyhow::Result<()> {
    let searcher = uxpro::searcher_from_config(config)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "searching");

    let rendered = match stack {
        Some(stack) => {
            let response = searcher.search_stack(query, stack, max_results)?;
            uxpro::output::render_stack(&response, &config.output)?
        }
        None => {
            let response = searcher.search(query, domain, max_results)?;
            uxpro::output::render_search(&response, &config.output)?
        }
    };
    print!("{rendered}");
    Ok(())
}

fn detect(config: &AppConfig, query: &str) {
    let classifier = &config.classifier;
    println!("{}", classifier.classify(query));
    for (domain, votes) in classifier.votes(query) {
        if votes > 0 {
            println!("  {domain}: {votes}");
        }
    }
}
