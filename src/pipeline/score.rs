//! Priority scoring and ordering
//!
//! Scores surviving records and sorts them descending. The weights are
//! heuristics carried as configurable defaults, not invariants.

use crate::config::ScoringConfig;
use crate::record::{RankedRecord, UrlRecord};
use std::cmp::Ordering;
use url::Url;

/// Computes the crawl priority for one record
///
/// Base is the declared priority hint, or the configured default when the
/// hint is absent. The homepage gets a bonus, paths containing a main-page
/// keyword get a bonus, and each path segment costs a depth penalty. The
/// result is clamped to [0.0, 1.0].
pub fn score_record(record: &UrlRecord, scoring: &ScoringConfig) -> f32 {
    let Ok(parsed) = Url::parse(&record.url) else {
        return 0.0;
    };

    // Non-finite hints would survive the clamp below and poison the sort
    let mut priority = record
        .priority_hint
        .filter(|p| p.is_finite())
        .unwrap_or(scoring.default_priority);
    let path = parsed.path().to_lowercase();

    if path.is_empty() || path == "/" {
        priority += scoring.homepage_bonus;
    }

    if scoring.keywords.iter().any(|k| path.contains(k.as_str())) {
        priority += scoring.keyword_bonus;
    }

    let depth = path.split('/').filter(|segment| !segment.is_empty()).count();
    priority -= depth as f32 * scoring.depth_penalty;

    priority.clamp(0.0, 1.0)
}

/// Ranks records by computed priority, descending
///
/// The sort is stable: records with equal priority keep their relative
/// input order.
pub fn rank_records(records: Vec<UrlRecord>, scoring: &ScoringConfig) -> Vec<RankedRecord> {
    let mut ranked: Vec<RankedRecord> = records
        .into_iter()
        .map(|record| {
            let priority = score_record(&record, scoring);
            RankedRecord { record, priority }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.priority
            .partial_cmp(&a.priority)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, hint: Option<f32>) -> UrlRecord {
        UrlRecord {
            priority_hint: hint,
            ..UrlRecord::page(url, "https://example.com/sitemap.xml")
        }
    }

    fn score(url: &str, hint: Option<f32>) -> f32 {
        score_record(&record(url, hint), &ScoringConfig::default())
    }

    #[test]
    fn test_homepage_scores_maximum() {
        // 0.5 base + 0.5 homepage bonus, clamped at 1.0
        assert_eq!(score("https://example.com/", None), 1.0);
        assert_eq!(score("https://example.com", None), 1.0);
    }

    #[test]
    fn test_keyword_bonus_applied() {
        // 0.5 base + 0.2 keyword - 0.1 depth
        let about = score("https://example.com/about", None);
        assert!((about - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_depth_penalty_per_segment() {
        let shallow = score("https://example.com/blog", None);
        let deep = score("https://example.com/blog/2024/01/post", None);
        assert!((shallow - 0.4).abs() < 1e-6);
        assert!((deep - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_declared_hint_replaces_default_base() {
        let hinted = score("https://example.com/pricing", Some(0.9));
        assert!((hinted - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_score_clamped_to_lower_bound() {
        let very_deep = score("https://example.com/a/b/c/d/e/f/g/h", None);
        assert_eq!(very_deep, 0.0);
    }

    #[test]
    fn test_score_clamped_to_upper_bound() {
        // Declared 0.9 + homepage bonus would exceed 1.0
        let clamped = score("https://example.com/", Some(0.9));
        assert_eq!(clamped, 1.0);
    }

    #[test]
    fn test_all_scores_within_unit_interval() {
        let urls = [
            "https://example.com/",
            "https://example.com/about",
            "https://example.com/a/b/c/d/e/f",
            "https://example.com/products/item",
        ];
        for url in urls {
            let s = score(url, Some(2.0));
            assert!((0.0..=1.0).contains(&s), "{} scored {}", url, s);
        }
    }

    #[test]
    fn test_non_finite_hint_falls_back_to_default() {
        let nan = score("https://example.com/page", Some(f32::NAN));
        assert!((0.0..=1.0).contains(&nan));
        assert_eq!(nan, score("https://example.com/page", None));

        let inf = score("https://example.com/page", Some(f32::INFINITY));
        assert_eq!(inf, score("https://example.com/page", None));
    }

    #[test]
    fn test_rank_sorts_descending() {
        let records = vec![
            record("https://example.com/a/b/c", None),
            record("https://example.com/", None),
            record("https://example.com/about", None),
        ];

        let ranked = rank_records(records, &ScoringConfig::default());
        assert_eq!(ranked[0].record.url, "https://example.com/");
        assert_eq!(ranked[1].record.url, "https://example.com/about");
        assert_eq!(ranked[2].record.url, "https://example.com/a/b/c");
    }

    #[test]
    fn test_equal_priorities_keep_input_order() {
        // Same depth, no keywords, no hints: identical scores
        let records = vec![
            record("https://example.com/first", None),
            record("https://example.com/second", None),
            record("https://example.com/third", None),
        ];

        let ranked = rank_records(records, &ScoringConfig::default());
        assert_eq!(ranked[0].record.url, "https://example.com/first");
        assert_eq!(ranked[1].record.url, "https://example.com/second");
        assert_eq!(ranked[2].record.url, "https://example.com/third");
    }
}
