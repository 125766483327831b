//! Sitemap-Scout: sitemap-driven page discovery
//!
//! This crate resolves a website's sitemap tree (sitemap indexes referencing
//! child sitemaps, which in turn list page URLs), respecting robots.txt
//! exclusions, deduplicating the aggregate, filtering out non-page resources,
//! and ranking the surviving URLs by crawl priority.

pub mod config;
pub mod pipeline;
pub mod record;
pub mod resolver;
pub mod robots;

use thiserror::Error;

/// Main error type for Sitemap-Scout operations
///
/// Per-document fetch and parse failures are absorbed inside the resolution
/// engine; only seed construction and configuration problems surface here.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors produced while fetching a single document
///
/// A `FetchError` is terminal for one document only: the fetcher has already
/// exhausted its retry budget by the time one of these is returned.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },
}

/// Result type alias for Sitemap-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for single-document fetches
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::ResolveConfig;
pub use record::{RankedRecord, ResourceKind, SitemapDocument, UrlRecord};
pub use resolver::{discover_site, SitemapResolver};
pub use robots::RobotsInfo;
