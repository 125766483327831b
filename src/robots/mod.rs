//! Robots.txt handling module
//!
//! Fetches and parses a site's robots.txt to extract sitemap declarations
//! and disallow prefixes. Robots absence or failure is non-fatal: the
//! resolver proceeds with an empty `RobotsInfo`.

mod parser;

pub use parser::{parse_robots, RobotsInfo};

use crate::config::RetryConfig;
use crate::resolver::fetch_with_retry;
use reqwest::Client;
use url::Url;

/// Fetches and parses robots.txt for a site origin
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `origin` - The site origin (scheme + host + port)
/// * `retry` - Retry policy for the fetch
///
/// # Returns
///
/// The extracted directives, or an empty `RobotsInfo` if robots.txt could
/// not be fetched for any reason. This function never fails.
pub async fn fetch_robots(client: &Client, origin: &Url, retry: &RetryConfig) -> RobotsInfo {
    let robots_url = match origin.join("/robots.txt") {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!("Cannot build robots.txt URL for {}: {}", origin, e);
            return RobotsInfo::default();
        }
    };

    match fetch_with_retry(client, robots_url.as_str(), retry).await {
        Ok(content) => {
            let info = parse_robots(&content);
            tracing::info!(
                "robots.txt for {}: {} sitemap declaration(s), {} disallow rule(s)",
                origin,
                info.sitemaps.len(),
                info.disallow.len()
            );
            info
        }
        Err(e) => {
            tracing::debug!("No usable robots.txt for {}: {}", origin, e);
            RobotsInfo::default()
        }
    }
}
