use crate::conf::types::AnalyzerConfig;
use crate::enrichment::user_agent::{Browser, OperatingSystem};
use crate::stats::StatsAggregator;
use crate::stats::tests::test_helpers::{
    GOOGLEBOT, HUMAN_LINUX, HUMAN_WINDOWS, YANDEXBOT, aggregate, record, ts,
};
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, BTreeSet};

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

//-----------------------------------------------------------------------------
// Degenerate input
//-----------------------------------------------------------------------------
#[test]
fn empty_aggregator_is_well_defined() {
    // Arrange
    let agg = StatsAggregator::new(AnalyzerConfig::default());

    // Assert
    assert_eq!(agg.total_traffic(), 0);
    assert_eq!(agg.traffic_rate_per_hour(), 0.0);
    assert!(agg.operating_system_share().is_empty());
    assert!(agg.browser_share().is_empty());
    assert!(agg.crawler_share().is_empty());
    assert_eq!(agg.average_visits_per_user(), 0.0);
    assert_eq!(agg.average_visits_per_hour(), 0.0);
    assert_eq!(agg.average_errors_per_hour(), 0.0);
    assert_eq!(agg.max_visits_per_second(), 0);
    assert_eq!(agg.max_visits_by_single_ip(), 0);
    assert!(agg.existing_full_urls().is_empty());
    assert!(agg.not_found_full_urls().is_empty());
    assert_eq!(agg.time_window(), None);
}

#[test]
fn all_bot_traffic_has_no_real_user_metrics() {
    // Arrange
    let agg = aggregate(&[
        record().agent(GOOGLEBOT).size(10).build(),
        record().agent(YANDEXBOT).size(20).status(404).build(),
    ]);

    // Assert
    assert_eq!(agg.total_traffic(), 30);
    assert_eq!(agg.bot_count(), 2);
    assert_eq!(agg.human_count(), 0);
    assert_eq!(agg.error_count(), 1);
    assert!(agg.operating_system_share().is_empty());
    assert_eq!(agg.average_visits_per_user(), 0.0);
    assert!(agg.existing_full_urls().is_empty());
    assert!(agg.not_found_full_urls().is_empty());
}

//-----------------------------------------------------------------------------
// Traffic rate
//-----------------------------------------------------------------------------
#[test]
fn rate_over_exactly_one_hour() {
    // Arrange
    let agg = aggregate(&[
        record().at("10/Oct/2023:10:00:00").size(60).build(),
        record().at("10/Oct/2023:11:00:00").size(40).build(),
    ]);

    // Assert
    assert_eq!(agg.total_traffic(), 100);
    assert_eq!(agg.traffic_rate_per_hour(), 100.0);
}

#[test]
fn single_timestamp_rate_equals_total() {
    // Arrange
    let agg = aggregate(&[
        record().size(10).build(),
        record().size(20).build(),
        record().size(30).build(),
    ]);

    // Assert
    assert_eq!(agg.traffic_rate_per_hour(), agg.total_traffic() as f64);
    assert_eq!(agg.traffic_rate_per_hour(), 60.0);
}

#[test]
fn partial_hours_are_truncated() {
    // Arrange: 2h30m counts as two hours
    let agg = aggregate(&[
        record().at("10/Oct/2023:10:00:00").size(300).build(),
        record().at("10/Oct/2023:12:30:00").size(300).build(),
    ]);

    // Assert
    assert_eq!(agg.traffic_rate_per_hour(), 300.0);
}

#[test]
fn window_tracks_out_of_order_records() {
    // Arrange
    let agg = aggregate(&[
        record().at("10/Oct/2023:12:00:00").build(),
        record().at("10/Oct/2023:09:00:00").build(),
        record().at("10/Oct/2023:11:00:00").build(),
    ]);

    // Act
    let window = agg.time_window().unwrap();

    // Assert
    assert_eq!(window.start, ts("10/Oct/2023:09:00:00"));
    assert_eq!(window.end, ts("10/Oct/2023:12:00:00"));
    assert_eq!(window.whole_hours(), 3);
}

#[test]
fn bot_bytes_count_towards_traffic() {
    // Arrange
    let agg = aggregate(&[
        record().size(100).build(),
        record().agent(GOOGLEBOT).size(900).build(),
    ]);

    // Assert
    assert_eq!(agg.total_traffic(), 1000);
}

//-----------------------------------------------------------------------------
// Bot gating
//-----------------------------------------------------------------------------
#[test]
fn googlebot_is_excluded_from_real_user_metrics() {
    // Arrange
    let agg = aggregate(&[
        record().ip("10.0.0.1").build(),
        record().ip("66.249.66.1").agent(GOOGLEBOT).build(),
        record().ip("66.249.66.1").agent(GOOGLEBOT).build(),
        record().ip("66.249.66.1").agent(GOOGLEBOT).build(),
    ]);

    // Assert
    assert_eq!(agg.average_visits_per_user(), 1.0);
    assert_eq!(agg.max_visits_by_single_ip(), 1);
    assert_eq!(agg.max_visits_per_second(), 1);
    assert_eq!(
        agg.operating_system_share(),
        BTreeMap::from([(OperatingSystem::Windows, 1.0)])
    );
    assert_eq!(agg.unique_visitors(), 1);
    assert_eq!(agg.request_count(), 4);
}

#[test]
fn errors_are_counted_for_bots_too() {
    // Arrange
    let agg = aggregate(&[
        record().status(404).build(),
        record().status(503).agent(GOOGLEBOT).build(),
        record().status(301).build(),
        record().status(200).build(),
    ]);

    // Assert
    assert_eq!(agg.error_count(), 2);
    assert_eq!(agg.average_errors_per_hour(), 2.0);
}

#[test]
fn visits_per_hour_counts_only_humans() {
    // Arrange
    let agg = aggregate(&[
        record().at("10/Oct/2023:10:00:00").build(),
        record().at("10/Oct/2023:10:30:00").build(),
        record().at("10/Oct/2023:11:00:00").build(),
        record().at("10/Oct/2023:12:00:00").build(),
        record().at("10/Oct/2023:12:00:00").agent(GOOGLEBOT).build(),
    ]);

    // Assert
    assert_eq!(agg.average_visits_per_hour(), 2.0);
}

//-----------------------------------------------------------------------------
// Density
//-----------------------------------------------------------------------------
#[test]
fn max_visits_per_second_groups_by_whole_second() {
    // Arrange
    let agg = aggregate(&[
        record().ip("10.0.0.1").at("10/Oct/2023:10:00:00").build(),
        record().ip("10.0.0.2").at("10/Oct/2023:10:00:00").build(),
        record().ip("10.0.0.3").at("10/Oct/2023:10:00:00").build(),
        record()
            .ip("10.0.0.4")
            .at("10/Oct/2023:10:00:00")
            .agent(GOOGLEBOT)
            .build(),
        record().ip("10.0.0.1").at("10/Oct/2023:10:00:01").build(),
    ]);

    // Assert
    assert_eq!(agg.max_visits_per_second(), 3);
}

#[test]
fn max_visits_by_single_ip_and_average_per_user() {
    // Arrange
    let agg = aggregate(&[
        record().ip("10.0.0.1").build(),
        record().ip("10.0.0.1").build(),
        record().ip("10.0.0.1").build(),
        record().ip("10.0.0.2").build(),
    ]);

    // Assert
    assert_eq!(agg.max_visits_by_single_ip(), 3);
    assert_eq!(agg.average_visits_per_user(), 2.0);
}

//-----------------------------------------------------------------------------
// Shares
//-----------------------------------------------------------------------------
#[test]
fn os_and_browser_shares_sum_to_one() {
    // Arrange
    let agg = aggregate(&[
        record().agent(HUMAN_WINDOWS).build(),
        record().agent(HUMAN_WINDOWS).build(),
        record().agent(HUMAN_WINDOWS).build(),
        record().agent(HUMAN_LINUX).build(),
        record().agent(GOOGLEBOT).build(),
    ]);

    // Assert
    assert_eq!(
        agg.operating_system_share(),
        BTreeMap::from([
            (OperatingSystem::Windows, 0.75),
            (OperatingSystem::Linux, 0.25),
        ])
    );
    assert_eq!(
        agg.browser_share(),
        BTreeMap::from([(Browser::Chrome, 0.75), (Browser::Firefox, 0.25)])
    );
}

#[test]
fn crawler_share_is_over_all_requests() {
    // Arrange
    let agg = aggregate(&[
        record().agent(GOOGLEBOT).build(),
        record().agent(GOOGLEBOT).build(),
        record().agent(YANDEXBOT).build(),
        record().build(),
    ]);

    // Assert
    assert_eq!(
        agg.crawler_share(),
        BTreeMap::from([("Googlebot".to_string(), 0.5), ("YandexBot".to_string(), 0.25)])
    );
}

#[test]
fn crawler_share_reports_zero_for_absent_crawlers() {
    // Arrange
    let agg = aggregate(&[record().build()]);

    // Assert
    assert_eq!(
        agg.crawler_share(),
        BTreeMap::from([("Googlebot".to_string(), 0.0), ("YandexBot".to_string(), 0.0)])
    );
}

#[test]
fn tracked_crawler_without_bot_in_name_is_counted() {
    // Arrange
    let slurp = "Mozilla/5.0 (compatible; Slurp/3.0; +http://help.yahoo.com/help/us/ysearch/slurp)";
    let config = AnalyzerConfig {
        tracked_crawlers: vec!["Slurp".to_string()],
        ..AnalyzerConfig::default()
    };
    let mut agg = StatsAggregator::new(config);

    // Act
    agg.push(&record().agent(slurp).build());
    agg.push(&record().build());

    // Assert
    assert_eq!(
        agg.crawler_share(),
        BTreeMap::from([("Slurp".to_string(), 0.5)])
    );
}

#[test]
fn untracked_programs_are_not_reported() {
    // Arrange
    let agg = aggregate(&[record().agent(HUMAN_WINDOWS).build()]);

    // Assert
    assert!(!agg.crawler_share().contains_key("Win64"));
    assert_eq!(agg.crawler_share().len(), 2);
}

//-----------------------------------------------------------------------------
// Page URLs
//-----------------------------------------------------------------------------
#[test]
fn ok_and_not_found_pages_bind_to_default_domain() {
    // Arrange
    let agg = aggregate(&[
        record().path("/a").status(200).build(),
        record().path("/a").status(200).build(),
        record().path("/missing").status(404).build(),
    ]);

    // Assert
    assert_eq!(agg.existing_full_urls(), set(&["https://example.com/a"]));
    assert_eq!(
        agg.not_found_full_urls(),
        set(&["https://example.com/missing"])
    );
}

#[test]
fn distinct_ok_paths_each_produce_a_url() {
    // Arrange
    let agg = aggregate(&[
        record().path("/a").build(),
        record().path("/b").build(),
        record().path("/c").status(404).build(),
    ]);

    // Assert
    assert_eq!(
        agg.existing_full_urls(),
        set(&["https://example.com/a", "https://example.com/b"])
    );
    assert_eq!(agg.not_found_full_urls(), set(&["https://example.com/c"]));
}

#[test]
fn referer_domain_is_used_for_page_url() {
    // Arrange
    let agg = aggregate(&[record()
        .path("/page")
        .referer("https://www.Blog.Example.org:8080/post?id=1")
        .build()]);

    // Assert
    assert_eq!(
        agg.existing_full_urls(),
        set(&["https://blog.example.org/page"])
    );
}

#[test]
fn same_path_via_two_domains_yields_two_urls() {
    // Arrange
    let agg = aggregate(&[
        record().path("/p").referer("https://a.example/").build(),
        record().path("/p").referer("http://b.example/x").build(),
        record().path("/p").referer("-").build(),
    ]);

    // Assert
    assert_eq!(
        agg.existing_full_urls(),
        set(&[
            "https://a.example/p",
            "https://b.example/p",
            "https://example.com/p",
        ])
    );
}

#[test]
fn path_without_leading_slash_is_prefixed() {
    // Arrange
    let agg = aggregate(&[record().path("about").build()]);

    // Assert
    assert_eq!(agg.existing_full_urls(), set(&["https://example.com/about"]));
}

#[test]
fn other_statuses_do_not_produce_urls() {
    // Arrange
    let agg = aggregate(&[
        record().path("/moved").status(301).build(),
        record().path("/boom").status(500).build(),
    ]);

    // Assert
    assert!(agg.existing_full_urls().is_empty());
    assert!(agg.not_found_full_urls().is_empty());
}

#[test]
fn bot_pages_are_not_listed() {
    // Arrange
    let agg = aggregate(&[
        record().path("/seen-by-bot").agent(GOOGLEBOT).build(),
        record().path("/gone").status(404).agent(GOOGLEBOT).build(),
    ]);

    // Assert
    assert!(agg.existing_full_urls().is_empty());
    assert!(agg.not_found_full_urls().is_empty());
}

#[test]
fn config_overrides_default_domain_and_scheme() {
    // Arrange
    let config = AnalyzerConfig {
        default_domain: "shop.test.org".to_string(),
        url_scheme: "http".to_string(),
        ..AnalyzerConfig::default()
    };
    let mut agg = StatsAggregator::new(config);

    // Act
    agg.push(&record().path("/cart").build());

    // Assert
    assert_eq!(agg.existing_full_urls(), set(&["http://shop.test.org/cart"]));
}

//-----------------------------------------------------------------------------
// Referring domains
//-----------------------------------------------------------------------------
#[test]
fn referring_domains_include_bots_and_skip_invalid() {
    // Arrange
    let agg = aggregate(&[
        record().referer("https://news.example.net/a").build(),
        record()
            .referer("https://www.search.example.com/?q=x")
            .agent(GOOGLEBOT)
            .build(),
        record().referer("-").build(),
        record().referer("localhost").build(),
    ]);

    // Assert
    assert_eq!(
        agg.referring_domains(),
        &set(&["news.example.net", "search.example.com"])
    );
}

//-----------------------------------------------------------------------------
// Snapshot
//-----------------------------------------------------------------------------
#[test]
fn snapshot_matches_individual_queries() {
    // Arrange
    let agg = aggregate(&[
        record().ip("10.0.0.1").size(500).build(),
        record().ip("10.0.0.2").status(404).path("/x").build(),
        record().agent(GOOGLEBOT).size(50).build(),
    ]);

    // Act
    let snap = agg.snapshot();

    // Assert
    assert_eq!(snap.requests, 3);
    assert_eq!(snap.human_requests, 2);
    assert_eq!(snap.bot_requests, 1);
    assert_eq!(snap.errors, 1);
    assert_eq!(snap.unique_visitors, 2);
    assert_eq!(snap.total_traffic, 550);
    assert_eq!(snap.traffic_rate_per_hour, agg.traffic_rate_per_hour());
    assert_eq!(snap.existing_urls, agg.existing_full_urls());
    assert_eq!(snap.not_found_urls, agg.not_found_full_urls());
    assert_eq!(snap.operating_systems, agg.operating_system_share());
}
