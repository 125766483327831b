//! Robots.txt directive parser
//!
//! Extracts the two directive kinds the resolver consumes: `Sitemap:`
//! declarations and `Disallow:` path prefixes. Deliberately not a full
//! robots matcher: no user-agent scoping, no wildcards, no crawl-delay.
//! Disallow rules apply globally as literal path-prefix matches.

use serde::Serialize;

/// Directives extracted from a site's robots.txt
#[derive(Debug, Clone, Default, Serialize)]
pub struct RobotsInfo {
    /// Declared sitemap URLs, in file order
    pub sitemaps: Vec<String>,

    /// Disallowed path prefixes, in file order
    pub disallow: Vec<String>,
}

impl RobotsInfo {
    /// Returns true if the given URL path matches a disallow prefix
    pub fn is_disallowed(&self, path: &str) -> bool {
        self.disallow.iter().any(|rule| path.starts_with(rule))
    }
}

/// Parses robots.txt content line by line
///
/// Directive keys are matched case-insensitively; the remainder of the line
/// is the value. Empty `Disallow:` values mean "allow all" in the robots
/// convention and are skipped rather than recorded as a match-everything
/// prefix.
pub fn parse_robots(content: &str) -> RobotsInfo {
    let mut info = RobotsInfo::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(value) = strip_directive(trimmed, "sitemap:") {
            if !value.is_empty() {
                info.sitemaps.push(value.to_string());
            }
        } else if let Some(value) = strip_directive(trimmed, "disallow:") {
            if !value.is_empty() {
                info.disallow.push(value.to_string());
            }
        }
    }

    info
}

/// Strips a case-insensitive directive key, returning the trimmed value
fn strip_directive<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let head = line.get(..key.len())?;
    if head.eq_ignore_ascii_case(key) {
        Some(line[key.len()..].trim())
    } else {
        None
    }
}
