//! Sitemap resolution engine
//!
//! Breadth-first, depth-bounded traversal of the sitemap graph. Each depth
//! fetches its whole frontier concurrently under a semaphore, then the
//! coordinator alone merges results into the visited set and the record
//! aggregate (collect-then-merge, no locks around shared state). A visited
//! set keyed by document URL guards against cycles and repeated references.

use crate::config::ResolveConfig;
use crate::record::{SitemapDocument, UrlRecord};
use crate::resolver::fetcher::{build_http_client, fetch_with_retry};
use crate::resolver::parser::parse_document;
use crate::robots::{fetch_robots, RobotsInfo};
use crate::ScoutError;
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use url::Url;

/// Raw output of one resolution pass: unfiltered records (possibly
/// containing duplicates across documents) plus the robots directives that
/// the filter pipeline consumes afterwards
#[derive(Debug)]
pub struct Resolution {
    pub records: Vec<UrlRecord>,
    pub robots: RobotsInfo,
}

/// Resolves a website's sitemap tree into a flat record list
///
/// All state (visited set, record aggregate) is scoped to a single
/// `resolve` call; nothing is cached across calls.
pub struct SitemapResolver {
    client: Client,
    config: ResolveConfig,
}

impl SitemapResolver {
    /// Creates a resolver, validating the configuration and building the
    /// shared HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(SitemapResolver)` - Ready to resolve
    /// * `Err(ScoutError)` - Invalid configuration or client build failure
    pub fn new(config: ResolveConfig) -> Result<Self, ScoutError> {
        crate::config::validate(&config)?;
        let client = build_http_client(config.fetch_timeout_secs)?;
        Ok(Self { client, config })
    }

    /// Resolves the sitemap tree rooted at the given website URL
    ///
    /// Per-document failures are logged and skipped; a resolution where
    /// every fetch fails still succeeds with an empty record list. Only an
    /// unusable base URL fails outright.
    pub async fn resolve(&self, base_url: &str) -> Result<Resolution, ScoutError> {
        let origin = site_origin(base_url)?;
        tracing::info!("Resolving sitemaps for {}", origin);

        let robots = fetch_robots(&self.client, &origin, &self.config.retry).await;
        let seeds = build_seed_frontier(&origin, &robots.sitemaps, &self.config);
        tracing::debug!("Seed frontier: {} sitemap candidate(s)", seeds.len());

        let records = self.resolve_frontier(&origin, seeds).await;
        tracing::info!("Resolution finished: {} raw record(s)", records.len());

        Ok(Resolution { records, robots })
    }

    /// Runs the breadth-first traversal over the seed frontier
    async fn resolve_frontier(&self, origin: &Url, seeds: Vec<String>) -> Vec<UrlRecord> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut records: Vec<UrlRecord> = Vec::new();
        let mut frontier = seeds;
        let mut depth = 0u32;
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_fetches as usize));

        while !frontier.is_empty() && depth < self.config.max_depth {
            tracing::info!(
                "Depth {}: resolving {} sitemap(s)",
                depth + 1,
                frontier.len()
            );

            let mut tasks = Vec::new();
            for url in frontier.drain(..) {
                // Mark attempted documents visited up front: failed URLs are
                // not refetched when a deeper index references them again
                if !visited.insert(url.clone()) {
                    continue;
                }

                let client = self.client.clone();
                let retry = self.config.retry.clone();
                let semaphore = semaphore.clone();
                tasks.push(async move {
                    let _permit = match semaphore.acquire_owned().await {
                        Ok(permit) => permit,
                        Err(_) => return SitemapDocument::failed(url, "fetch pool closed"),
                    };
                    fetch_and_parse(&client, &url, &retry).await
                });
            }

            // Only the coordinator touches `visited` and `records`; workers
            // hand their documents back here after the whole depth completes
            let documents = futures::future::join_all(tasks).await;

            let mut next_frontier: Vec<String> = Vec::new();
            for doc in documents {
                if let Some(cause) = &doc.error {
                    tracing::warn!(
                        "Skipping sitemap {} at depth {}: {}",
                        doc.url,
                        depth + 1,
                        cause
                    );
                    continue;
                }

                tracing::debug!(
                    "Sitemap {}: {} entries, {} child sitemap(s)",
                    doc.url,
                    doc.entries.len(),
                    doc.child_sitemaps.len()
                );
                records.extend(doc.entries);

                for child in doc.child_sitemaps {
                    let Some(absolute) = absolutize(origin, &child) else {
                        tracing::debug!("Ignoring unresolvable child sitemap {:?}", child);
                        continue;
                    };
                    if !visited.contains(&absolute) && !next_frontier.contains(&absolute) {
                        next_frontier.push(absolute);
                    }
                }
            }

            frontier = next_frontier;
            depth += 1;
        }

        if !frontier.is_empty() {
            tracing::info!(
                "Depth limit {} reached with {} sitemap(s) unresolved",
                self.config.max_depth,
                frontier.len()
            );
        }

        records
    }
}

/// Fetches one sitemap URL and parses the body
///
/// Fetch failures and parse failures surface identically, as a failed
/// document the engine logs and skips.
async fn fetch_and_parse(
    client: &Client,
    url: &str,
    retry: &crate::config::RetryConfig,
) -> SitemapDocument {
    match fetch_with_retry(client, url, retry).await {
        Ok(body) => parse_document(&body, url),
        Err(e) => SitemapDocument::failed(url, e.to_string()),
    }
}

/// Extracts the site origin (scheme + host + port, path reset to `/`)
/// from a base website URL
pub fn site_origin(base_url: &str) -> Result<Url, ScoutError> {
    let parsed = Url::parse(base_url).map_err(|e| ScoutError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ScoutError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ScoutError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: "missing host".to_string(),
        });
    }

    let mut origin = parsed;
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    Ok(origin)
}

/// Builds the seed frontier for a resolution
///
/// Union of robots-declared sitemaps and the configured well-known paths,
/// in that order, deduplicated. If both sources yield nothing, falls back
/// to a single `/sitemap.xml` guess.
pub fn build_seed_frontier(
    origin: &Url,
    declared: &[String],
    config: &ResolveConfig,
) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut seeds: Vec<String> = Vec::new();

    for candidate in declared {
        if let Some(absolute) = absolutize(origin, candidate) {
            if seen.insert(absolute.clone()) {
                seeds.push(absolute);
            }
        }
    }

    for path in &config.discovery.well_known_paths {
        if let Some(absolute) = absolutize(origin, path) {
            if seen.insert(absolute.clone()) {
                seeds.push(absolute);
            }
        }
    }

    if seeds.is_empty() {
        if let Some(fallback) = absolutize(origin, "/sitemap.xml") {
            seeds.push(fallback);
        }
    }

    seeds
}

/// Resolves a possibly-relative sitemap reference against the site origin
fn absolutize(origin: &Url, candidate: &str) -> Option<String> {
    match Url::parse(candidate) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            Some(url.to_string())
        }
        // Relative reference (or an unusable scheme): resolve against the
        // document's own domain
        _ => origin.join(candidate).ok().map(|u| u.to_string()),
    }
}
