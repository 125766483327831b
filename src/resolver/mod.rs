//! Resolution module: fetching, parsing, and traversing the sitemap graph
//!
//! This module contains the core discovery logic:
//! - HTTP fetching with retry and exponential backoff
//! - Sitemap XML parsing (indexes, url-sets, image extensions)
//! - Breadth-first, depth-bounded resolution of the sitemap tree

mod engine;
mod fetcher;
mod parser;

pub use engine::{build_seed_frontier, site_origin, Resolution, SitemapResolver};
pub use fetcher::{backoff_delay, build_http_client, fetch_with_retry};
pub use parser::parse_document;

use crate::config::ResolveConfig;
use crate::pipeline;
use crate::record::RankedRecord;
use crate::Result;

/// Discovers, deduplicates, filters, and ranks every crawlable page URL on
/// a website
///
/// This is the main library entry point, wiring the full control flow:
/// seeds -> resolution engine -> dedup -> filter & priority pipeline. The
/// returned list is ordered by descending computed priority and truncated
/// to `config.max_results` when set.
///
/// # Arguments
///
/// * `config` - Tuning parameters; validated before any network activity
/// * `base_url` - The website to discover (any page URL on the site works;
///   only its origin is used)
///
/// # Example
///
/// ```no_run
/// use sitemap_scout::{discover_site, ResolveConfig};
///
/// # async fn example() -> sitemap_scout::Result<()> {
/// let ranked = discover_site(ResolveConfig::default(), "https://example.com").await?;
/// for entry in &ranked {
///     println!("{:.2}  {}", entry.priority, entry.record.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn discover_site(config: ResolveConfig, base_url: &str) -> Result<Vec<RankedRecord>> {
    let resolver = SitemapResolver::new(config.clone())?;
    let origin = site_origin(base_url)?;
    let resolution = resolver.resolve(base_url).await?;

    let deduped = pipeline::dedupe(resolution.records, config.url_identity);
    let mut ranked = pipeline::filter_and_rank(deduped, &origin, &resolution.robots, &config);

    if let Some(limit) = config.max_results {
        ranked.truncate(limit);
    }

    tracing::info!("Discovery complete: {} ranked URL(s)", ranked.len());
    Ok(ranked)
}
