use serde::Deserialize;

/// Main configuration structure for a sitemap resolution
///
/// Every tuning knob the resolution engine and the filter pipeline consume
/// lives here and is passed in explicitly; there is no ambient global state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Maximum sitemap tree depth to resolve (each depth is one frontier)
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of concurrent sitemap fetches within one depth
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: u32,

    /// Per-attempt HTTP timeout in seconds
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,

    /// Cap on the number of ranked URLs returned (unlimited when absent)
    #[serde(rename = "max-results")]
    pub max_results: Option<usize>,

    /// Identity policy applied when deduplicating discovered URLs
    #[serde(rename = "url-identity")]
    pub url_identity: UrlIdentity,

    pub retry: RetryConfig,
    pub discovery: DiscoveryConfig,
    pub filters: FilterConfig,
    pub scoring: ScoringConfig,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_concurrent_fetches: 5,
            fetch_timeout_secs: 30,
            max_results: None,
            url_identity: UrlIdentity::Exact,
            retry: RetryConfig::default(),
            discovery: DiscoveryConfig::default(),
            filters: FilterConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

/// How two discovered URL strings are judged to be the same record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlIdentity {
    /// Exact string equality; trailing slashes are significant
    Exact,
    /// Trailing slashes are stripped before comparison
    TrimTrailingSlash,
}

/// Retry behavior for individual document fetches
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts per document, including the first
    #[serde(rename = "max-attempts")]
    pub max_attempts: u32,

    /// Minimum delay between attempts, in seconds
    #[serde(rename = "backoff-floor-secs")]
    pub backoff_floor_secs: u64,

    /// Maximum delay between attempts, in seconds
    #[serde(rename = "backoff-ceiling-secs")]
    pub backoff_ceiling_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_floor_secs: 4,
            backoff_ceiling_secs: 10,
        }
    }
}

/// Seed discovery configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Conventional sitemap paths probed in addition to robots.txt
    /// declarations
    #[serde(rename = "well-known-paths")]
    pub well_known_paths: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            well_known_paths: [
                "/sitemap.xml",
                "/sitemap_index.xml",
                "/sitemaps.xml",
                "/sitemap/sitemap.xml",
                "/wp-sitemap.xml",
                "/sitemap1.xml",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
        }
    }
}

/// Hard-exclusion rules applied by the filter pipeline
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Path suffixes (lowercased) that mark a URL as a non-page resource
    #[serde(rename = "excluded-extensions")]
    pub excluded_extensions: Vec<String>,

    /// Path substrings (lowercased) that exclude a URL outright
    #[serde(rename = "excluded-patterns")]
    pub excluded_patterns: Vec<String>,

    /// Maximum accepted absolute-URL length in characters
    #[serde(rename = "max-url-length")]
    pub max_url_length: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_extensions: [
                ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".css", ".js",
                ".ico", ".xml", ".txt", ".zip",
            ]
            .iter()
            .map(|e| e.to_string())
            .collect(),
            excluded_patterns: ["admin", "wp-admin", "login", "register", "api/"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            max_url_length: 200,
        }
    }
}

/// Priority-scoring weights
///
/// These are heuristic defaults inherited from field use, not invariants;
/// they are kept configurable on purpose.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Base score for records without a declared priority hint
    #[serde(rename = "default-priority")]
    pub default_priority: f32,

    /// Bonus applied when the path is the site root
    #[serde(rename = "homepage-bonus")]
    pub homepage_bonus: f32,

    /// Bonus applied when the path contains one of `keywords`
    #[serde(rename = "keyword-bonus")]
    pub keyword_bonus: f32,

    /// Penalty applied per non-empty path segment
    #[serde(rename = "depth-penalty")]
    pub depth_penalty: f32,

    /// Path keywords that mark a main page
    pub keywords: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_priority: 0.5,
            homepage_bonus: 0.5,
            keyword_bonus: 0.2,
            depth_penalty: 0.1,
            keywords: ["about", "service", "product", "contact"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}
