//! Hard-exclusion filters
//!
//! Each rule is a hard exclusion applied in order; a record is either kept
//! or dropped, never partially scored.

use crate::config::FilterConfig;
use crate::record::UrlRecord;
use crate::robots::RobotsInfo;
use url::Url;

/// Filters records down to same-site, crawlable page URLs
///
/// Exclusion order:
/// 1. Malformed URL (unparseable)
/// 2. Host does not exactly match the target origin's host and port
/// 3. Lowercased path ends with an excluded non-page extension
/// 4. Lowercased path contains an excluded substring
/// 5. Path matches a robots-disallow prefix (literal prefix match)
/// 6. Absolute URL longer than the configured maximum
pub fn filter_records(
    records: Vec<UrlRecord>,
    origin: &Url,
    robots: &RobotsInfo,
    filters: &FilterConfig,
) -> Vec<UrlRecord> {
    let before = records.len();

    let kept: Vec<UrlRecord> = records
        .into_iter()
        .filter(|record| keep(record, origin, robots, filters))
        .collect();

    tracing::debug!("Filter: {} -> {} record(s)", before, kept.len());
    kept
}

/// Applies all exclusion rules to one record
fn keep(record: &UrlRecord, origin: &Url, robots: &RobotsInfo, filters: &FilterConfig) -> bool {
    let Ok(parsed) = Url::parse(&record.url) else {
        tracing::debug!("Dropping malformed URL {:?}", record.url);
        return false;
    };

    if parsed.host_str() != origin.host_str()
        || parsed.port_or_known_default() != origin.port_or_known_default()
    {
        return false;
    }

    let path = parsed.path().to_lowercase();

    if filters
        .excluded_extensions
        .iter()
        .any(|ext| path.ends_with(ext.as_str()))
    {
        return false;
    }

    if filters
        .excluded_patterns
        .iter()
        .any(|pattern| path.contains(pattern.as_str()))
    {
        return false;
    }

    if robots.is_disallowed(parsed.path()) {
        return false;
    }

    if record.url.len() > filters.max_url_length {
        return false;
    }

    true
}
