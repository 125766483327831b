//! Sitemap-Scout main entry point
//!
//! Command-line interface for discovering, filtering, and ranking a
//! website's crawlable page URLs from its sitemap tree.

use anyhow::Context;
use clap::Parser;
use sitemap_scout::config::load_config_with_hash;
use sitemap_scout::{discover_site, ResolveConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitemap-Scout: sitemap-driven page discovery
///
/// Resolves a website's sitemap tree while respecting robots.txt, removes
/// duplicates and non-page resources, and prints the discovered URLs in
/// crawl-priority order.
#[derive(Parser, Debug)]
#[command(name = "sitemap-scout")]
#[command(version)]
#[command(about = "Discover and rank a website's crawlable page URLs", long_about = None)]
struct Cli {
    /// Base URL of the website to discover
    #[arg(value_name = "URL")]
    url: String,

    /// Path to a TOML configuration file (flags below override it)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum sitemap tree depth to resolve
    #[arg(long)]
    max_depth: Option<u32>,

    /// Maximum concurrent sitemap fetches per depth
    #[arg(long)]
    concurrency: Option<u32>,

    /// Per-attempt fetch timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Cap on the number of URLs printed
    #[arg(long)]
    max_pages: Option<usize>,

    /// Emit the full ranked records as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    tracing::debug!(
        "Resolving with max_depth={}, concurrency={}, timeout={}s",
        config.max_depth,
        config.max_concurrent_fetches,
        config.fetch_timeout_secs
    );

    let ranked = discover_site(config, &cli.url)
        .await
        .with_context(|| format!("discovery failed for {}", cli.url))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        for entry in &ranked {
            println!("{:.2}  {}", entry.priority, entry.record.url);
        }
        if ranked.is_empty() {
            tracing::warn!("No crawlable page URLs discovered for {}", cli.url);
        }
    }

    Ok(())
}

/// Builds the resolve configuration from the optional file plus CLI
/// overrides
fn build_config(cli: &Cli) -> anyhow::Result<ResolveConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            tracing::info!("Configuration loaded from {} (hash: {})", path.display(), hash);
            config
        }
        None => ResolveConfig::default(),
    };

    if let Some(depth) = cli.max_depth {
        config.max_depth = depth;
    }
    if let Some(concurrency) = cli.concurrency {
        config.max_concurrent_fetches = concurrency;
    }
    if let Some(timeout) = cli.timeout {
        config.fetch_timeout_secs = timeout;
    }
    if let Some(max_pages) = cli.max_pages {
        config.max_results = Some(max_pages);
    }

    // Overrides bypass the file loader, so validate the merged result
    sitemap_scout::config::validate(&config)?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_scout=info,warn"),
            1 => EnvFilter::new("sitemap_scout=debug,info"),
            2 => EnvFilter::new("sitemap_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
