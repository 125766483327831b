//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the resolver, including:
//! - Building the shared HTTP client with a proper user agent string
//! - GET requests for sitemap and robots.txt documents
//! - Retry logic with exponential backoff for transient failures
//! - Error classification

use crate::config::RetryConfig;
use crate::{FetchError, FetchResult};
use reqwest::Client;
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!("sitemap-scout/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by all fetches in a resolution
///
/// The client holds no business state; it only pools connections. Each
/// fetch is independent and concurrent calls are safe.
///
/// # Arguments
///
/// * `timeout_secs` - Per-attempt request timeout in seconds
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the text content of one URL, retrying transient failures
///
/// A non-2xx status, a connection error, and a timeout are all transient
/// failures subject to retry. After the attempt budget is exhausted, the
/// last underlying cause is returned; empty content is never reported as
/// success in place of an error.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The URL to fetch
/// * `retry` - Attempt budget and backoff bounds
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - The last failure after exhausting all attempts
pub async fn fetch_with_retry(
    client: &Client,
    url: &str,
    retry: &RetryConfig,
) -> FetchResult<String> {
    let mut last_error = None;

    for attempt in 1..=retry.max_attempts {
        match fetch_once(client, url).await {
            Ok(content) => {
                tracing::debug!("Fetched {} on attempt {}", url, attempt);
                return Ok(content);
            }
            Err(e) => {
                tracing::debug!(
                    "Fetch attempt {}/{} for {} failed: {}",
                    attempt,
                    retry.max_attempts,
                    url,
                    e
                );
                last_error = Some(e);
            }
        }

        if attempt < retry.max_attempts {
            tokio::time::sleep(backoff_delay(attempt, retry)).await;
        }
    }

    // max_attempts >= 1 is enforced by config validation, so the loop body
    // ran at least once
    Err(last_error.unwrap_or(FetchError::Timeout {
        url: url.to_string(),
    }))
}

/// Performs a single GET attempt
async fn fetch_once(client: &Client, url: &str) -> FetchResult<String> {
    let response = client.get(url).send().await.map_err(|e| classify(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify(url, e))
}

/// Classifies a reqwest error into the fetch error taxonomy
fn classify(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Computes the delay before the next attempt
///
/// Exponential in the attempt number (base 2^attempt seconds), clamped to
/// the configured floor and ceiling so retries are neither sub-second
/// hammering nor unbounded waits.
pub fn backoff_delay(attempt: u32, retry: &RetryConfig) -> Duration {
    let exponential = 2u64.saturating_pow(attempt);
    Duration::from_secs(exponential.clamp(retry.backoff_floor_secs, retry.backoff_ceiling_secs))
}
