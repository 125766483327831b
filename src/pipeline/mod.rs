//! Post-resolution pipeline: dedup, hard-exclusion filters, and priority
//! ranking
//!
//! The resolution engine hands this module a flat, possibly-duplicated
//! record list; the pipeline imposes the final deterministic ordering.

mod dedupe;
mod filter;
mod score;

pub use dedupe::dedupe;
pub use filter::filter_records;
pub use score::{rank_records, score_record};

use crate::config::ResolveConfig;
use crate::record::{RankedRecord, UrlRecord};
use crate::robots::RobotsInfo;
use url::Url;

/// Filters deduplicated records and ranks the survivors
///
/// # Arguments
///
/// * `records` - Deduplicated records from the resolution engine
/// * `origin` - The target site origin; off-host records are rejected
/// * `robots` - Robots directives; disallow prefixes are hard exclusions
/// * `config` - Filter rules and scoring weights
pub fn filter_and_rank(
    records: Vec<UrlRecord>,
    origin: &Url,
    robots: &RobotsInfo,
    config: &ResolveConfig,
) -> Vec<RankedRecord> {
    let kept = filter_records(records, origin, robots, &config.filters);
    rank_records(kept, &config.scoring)
}
