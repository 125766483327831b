//! End-to-end discovery tests
//!
//! These tests run the full seed -> resolution -> dedup -> filter/rank
//! control flow against a wiremock HTTP server.

use sitemap_scout::config::{ResolveConfig, RetryConfig};
use sitemap_scout::{discover_site, ResourceKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test configuration: zeroed backoff so retries do not slow the suite,
/// and a trimmed well-known list so each test mocks only what it uses
fn test_config(well_known: &[&str]) -> ResolveConfig {
    let mut config = ResolveConfig::default();
    config.retry = RetryConfig {
        max_attempts: 2,
        backoff_floor_secs: 0,
        backoff_ceiling_secs: 0,
    };
    config.discovery.well_known_paths = well_known.iter().map(|p| p.to_string()).collect();
    config
}

async fn mount_xml(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_url_set_discovery_filters_and_ranks() {
    let server = MockServer::start().await;
    let base = server.uri();

    // robots.txt is absent (404 by default); /sitemap.xml is a url-set with
    // a hinted page, a non-page .pdf, and a keyword page
    let sitemap = format!(
        r#"<urlset>
  <url><loc>{base}/pricing</loc><priority>0.9</priority></url>
  <url><loc>{base}/brochure.pdf</loc></url>
  <url><loc>{base}/about</loc></url>
</urlset>"#
    );
    mount_xml(&server, "/sitemap.xml", sitemap).await;

    let ranked = discover_site(test_config(&["/sitemap.xml"]), &base)
        .await
        .unwrap();

    // The .pdf entry is excluded by the extension rule
    let urls: Vec<&str> = ranked.iter().map(|r| r.record.url.as_str()).collect();
    assert_eq!(urls.len(), 2);
    assert!(urls.contains(&format!("{base}/pricing").as_str()));
    assert!(urls.contains(&format!("{base}/about").as_str()));

    // Output is sorted descending by computed priority
    assert!(ranked[0].priority >= ranked[1].priority);
    for entry in &ranked {
        assert!((0.0..=1.0).contains(&entry.priority));
        assert_eq!(entry.record.kind, ResourceKind::Page);
    }
}

#[tokio::test]
async fn test_failing_child_sitemap_does_not_abort_resolution() {
    let server = MockServer::start().await;
    let base = server.uri();

    let index = format!(
        r#"<sitemapindex>
  <sitemap><loc>{base}/sitemap1.xml</loc></sitemap>
  <sitemap><loc>{base}/sitemap2.xml</loc></sitemap>
</sitemapindex>"#
    );
    mount_xml(&server, "/sitemap_index.xml", index).await;

    let child = format!(
        r#"<urlset>
  <url><loc>{base}/alpha</loc></url>
  <url><loc>{base}/beta</loc></url>
</urlset>"#
    );
    mount_xml(&server, "/sitemap1.xml", child).await;

    // sitemap2 fails on every attempt
    Mock::given(method("GET"))
        .and(path("/sitemap2.xml"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2) // retried once, then given up on
        .mount(&server)
        .await;

    let ranked = discover_site(test_config(&["/sitemap_index.xml"]), &base)
        .await
        .unwrap();

    let urls: Vec<&str> = ranked.iter().map(|r| r.record.url.as_str()).collect();
    assert_eq!(urls.len(), 2);
    assert!(urls.contains(&format!("{base}/alpha").as_str()));
    assert!(urls.contains(&format!("{base}/beta").as_str()));
}

#[tokio::test]
async fn test_cyclic_index_graph_terminates_and_visits_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    // A references B, B references A: each document must be fetched at
    // most once and resolution must still terminate
    let index_a = format!(
        r#"<sitemapindex>
  <sitemap><loc>{base}/sitemap_b.xml</loc></sitemap>
</sitemapindex>"#
    );
    let index_b = format!(
        r#"<sitemapindex>
  <sitemap><loc>{base}/sitemap_a.xml</loc></sitemap>
  <sitemap><loc>{base}/pages.xml</loc></sitemap>
</sitemapindex>"#
    );
    let pages = format!("<urlset><url><loc>{base}/page</loc></url></urlset>");

    Mock::given(method("GET"))
        .and(path("/sitemap_a.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_a))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap_b.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_b))
        .expect(1)
        .mount(&server)
        .await;
    mount_xml(&server, "/pages.xml", pages).await;

    let ranked = discover_site(test_config(&["/sitemap_a.xml"]), &base)
        .await
        .unwrap();

    let urls: Vec<&str> = ranked.iter().map(|r| r.record.url.as_str()).collect();
    assert_eq!(urls, vec![format!("{base}/page").as_str()]);
}

#[tokio::test]
async fn test_depth_limit_stops_before_deeper_levels() {
    let server = MockServer::start().await;
    let base = server.uri();

    let index = format!(
        r#"<sitemapindex>
  <sitemap><loc>{base}/level2_index.xml</loc></sitemap>
</sitemapindex>"#
    );
    mount_xml(&server, "/sitemap_index.xml", index).await;

    // Neither the second-level index nor the url-set below it may be
    // fetched with max_depth = 1
    Mock::given(method("GET"))
        .and(path("/level2_index.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<sitemapindex/>"))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = test_config(&["/sitemap_index.xml"]);
    config.max_depth = 1;

    let ranked = discover_site(config, &base).await.unwrap();
    assert!(ranked.is_empty());
}

#[tokio::test]
async fn test_robots_declared_sitemap_and_disallow_rules() {
    let server = MockServer::start().await;
    let base = server.uri();

    let robots = format!("User-agent: *\nDisallow: /private\nSitemap: {base}/from_robots.xml");
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(robots))
        .mount(&server)
        .await;

    let sitemap = format!(
        r#"<urlset>
  <url><loc>{base}/private/report</loc></url>
  <url><loc>{base}/team</loc></url>
</urlset>"#
    );
    mount_xml(&server, "/from_robots.xml", sitemap).await;

    // Empty well-known list: the robots declaration is the only seed
    let ranked = discover_site(test_config(&[]), &base).await.unwrap();

    let urls: Vec<&str> = ranked.iter().map(|r| r.record.url.as_str()).collect();
    assert_eq!(urls, vec![format!("{base}/team").as_str()]);
}

#[tokio::test]
async fn test_duplicates_across_documents_collapse_to_one() {
    let server = MockServer::start().await;
    let base = server.uri();

    let index = format!(
        r#"<sitemapindex>
  <sitemap><loc>{base}/a.xml</loc></sitemap>
  <sitemap><loc>{base}/b.xml</loc></sitemap>
</sitemapindex>"#
    );
    mount_xml(&server, "/sitemap_index.xml", index).await;

    let shared = format!("<urlset><url><loc>{base}/shared</loc></url></urlset>");
    mount_xml(&server, "/a.xml", shared.clone()).await;
    mount_xml(&server, "/b.xml", shared).await;

    let ranked = discover_site(test_config(&["/sitemap_index.xml"]), &base)
        .await
        .unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].record.url, format!("{base}/shared"));
}

#[tokio::test]
async fn test_total_fetch_failure_yields_empty_success() {
    let server = MockServer::start().await;
    let base = server.uri();

    // No mocks at all: robots.txt and every seed return 404. Absence of
    // pages is a reportable outcome, not a crash
    let ranked = discover_site(test_config(&["/sitemap.xml", "/sitemap_index.xml"]), &base)
        .await
        .unwrap();
    assert!(ranked.is_empty());
}

#[tokio::test]
async fn test_max_results_truncates_ranked_output() {
    let server = MockServer::start().await;
    let base = server.uri();

    let sitemap = format!(
        r#"<urlset>
  <url><loc>{base}/</loc></url>
  <url><loc>{base}/about</loc></url>
  <url><loc>{base}/blog</loc></url>
</urlset>"#
    );
    mount_xml(&server, "/sitemap.xml", sitemap).await;

    let mut config = test_config(&["/sitemap.xml"]);
    config.max_results = Some(2);

    let ranked = discover_site(config, &base).await.unwrap();
    assert_eq!(ranked.len(), 2);
    // Truncation happens after sorting, so the homepage survives
    assert_eq!(ranked[0].record.url, format!("{base}/"));
}

#[tokio::test]
async fn test_invalid_base_url_fails_before_network() {
    let result = discover_site(test_config(&["/sitemap.xml"]), "not a url").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_invalid_configuration_fails_before_network() {
    let mut config = test_config(&["/sitemap.xml"]);
    config.max_concurrent_fetches = 0;
    let result = discover_site(config, "https://example.com").await;
    assert!(result.is_err());
}
