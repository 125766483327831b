//! URL record deduplication
//!
//! First occurrence wins: later duplicates are dropped outright, their
//! metadata is never merged into the kept record.

use crate::config::UrlIdentity;
use crate::record::UrlRecord;
use std::collections::HashSet;

/// Removes duplicate records according to the identity policy
///
/// The policy only affects the comparison key; kept records retain their
/// original URL strings untouched.
pub fn dedupe(records: Vec<UrlRecord>, identity: UrlIdentity) -> Vec<UrlRecord> {
    let before = records.len();
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<UrlRecord> = Vec::new();

    for record in records {
        if seen.insert(identity_key(&record.url, identity)) {
            unique.push(record);
        }
    }

    tracing::debug!("Dedup: {} -> {} record(s)", before, unique.len());
    unique
}

/// Computes the identity key for a URL under the given policy
fn identity_key(url: &str, identity: UrlIdentity) -> String {
    match identity {
        UrlIdentity::Exact => url.to_string(),
        UrlIdentity::TrimTrailingSlash => url.trim_end_matches('/').to_string(),
    }
}
