//! CLI tool for inspecting the Deletion Queue help panel.
//!
//! Renders the panel and checks the documentation links without starting
//! the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Print the panel markup
//! cargo run --bin helpctl -- render
//!
//! # Print the display tree as JSON
//! cargo run --bin helpctl -- render --format json
//!
//! # List catalog entries with their resolved URLs
//! cargo run --bin helpctl -- links
//!
//! # Fail if any catalog path does not resolve
//! cargo run --bin helpctl -- --docs-base-url https://docs.example.com/ check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`DOCS_BASE_URL`, `ICON_BASE_PATH`, `HELP_CATALOG_FILE`);
//! see [`deletion_queue_help::config`].

use deletion_queue_help::config::Config;
use deletion_queue_help::domain::capabilities::DocUrlResolver;
use deletion_queue_help::domain::catalog::LinkCatalog;
use deletion_queue_help::infrastructure::catalog_file::load_catalog;
use deletion_queue_help::infrastructure::docs::BaseUrlDocResolver;
use deletion_queue_help::infrastructure::icons::AssetIconRenderer;
use deletion_queue_help::render::HelpPanelRenderer;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for the Deletion Queue help panel.
#[derive(Parser)]
#[command(name = "helpctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Documentation root, overrides DOCS_BASE_URL
    #[arg(long, global = true)]
    docs_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rendered help panel
    Render {
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },

    /// List catalog entries with their resolved URLs
    Links,

    /// Resolve every catalog entry and report failures
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = cli_config(Config::from_env(), cli.docs_base_url)?;

    let resolver =
        BaseUrlDocResolver::new(&config.docs_base_url).context("Invalid documentation base URL")?;
    let catalog = load_configured_catalog(&config)?;

    match cli.command {
        Commands::Render { format } => render(&config, resolver, &catalog, format)?,
        Commands::Links => list_links(&resolver, &catalog),
        Commands::Check => return Ok(check_links(&resolver, &catalog)),
    }

    Ok(ExitCode::SUCCESS)
}

/// Applies command-line overrides, then validates the settings the CLI uses.
///
/// Server-only settings such as `LOG_FORMAT` and `LISTEN` are not checked.
fn cli_config(mut config: Config, docs_base_url: Option<String>) -> Result<Config> {
    if let Some(base) = docs_base_url {
        config.docs_base_url = base;
    }
    config.validate_content()?;
    Ok(config)
}

fn load_configured_catalog(config: &Config) -> Result<LinkCatalog> {
    match &config.catalog_file {
        Some(path) => load_catalog(path),
        None => Ok(LinkCatalog::default()),
    }
}

/// Prints the panel as HTML or as a JSON display tree.
fn render(
    config: &Config,
    resolver: BaseUrlDocResolver,
    catalog: &LinkCatalog,
    format: Format,
) -> Result<()> {
    let icons = AssetIconRenderer::new(config.icon_base_path.clone());
    let renderer = HelpPanelRenderer::new(Arc::new(resolver), Arc::new(icons));

    let panel = renderer
        .render(catalog)
        .context("Failed to render help panel")?;

    match format {
        Format::Html => println!("{panel}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&panel)?),
    }

    Ok(())
}

fn list_links(resolver: &BaseUrlDocResolver, catalog: &LinkCatalog) {
    println!("{}", "Help links".bright_blue().bold());
    println!("  Base: {}", resolver.base_url().cyan());
    println!();

    if catalog.is_empty() {
        println!("{}", "  Catalog is empty".yellow());
        return;
    }

    for (i, entry) in catalog.iter().enumerate() {
        println!("{:>3}. {}", i + 1, entry.title().bright_white().bold());
        match resolver.resolve(entry.path()) {
            Ok(url) => println!("     {}", url.green()),
            Err(e) => println!("     {} ({})", entry.path().red(), e),
        }
    }
}

/// Returns a failing exit code if any entry does not resolve.
fn check_links(resolver: &BaseUrlDocResolver, catalog: &LinkCatalog) -> ExitCode {
    let failures: Vec<_> = catalog
        .iter()
        .filter_map(|entry| resolver.resolve(entry.path()).err().map(|e| (entry, e)))
        .collect();

    if failures.is_empty() {
        println!(
            "{}",
            format!("All {} links resolve", catalog.len()).green().bold()
        );
        return ExitCode::SUCCESS;
    }

    for (entry, e) in &failures {
        println!("{} {}: {}", "FAIL".red().bold(), entry.title(), e);
    }
    println!();
    println!(
        "{}",
        format!("{} of {} links failed", failures.len(), catalog.len()).red()
    );

    ExitCode::FAILURE
}
