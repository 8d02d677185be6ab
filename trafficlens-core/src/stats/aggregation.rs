use crate::access_log::LogRecord;
use crate::conf::types::AnalyzerConfig;
use crate::enrichment::user_agent::{Browser, OperatingSystem};
use crate::stats::domain::{extract_domain, normalize_path};
use crate::stats::snapshot::StatsSnapshot;
use crate::stats::window::{TimeWindow, rate_hours};
use ahash::AHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;

/// Running aggregates over a stream of [`LogRecord`]s.
///
/// Records are pushed one at a time, in file order. Every query is a pure
/// read and can be called at any point, including before the first record.
///
/// Bot traffic (see [`UserAgentInfo::is_bot`]) counts towards traffic totals,
/// error counts, the time window, referring domains and crawler counts. It is
/// excluded from everything that describes real users: visit rates and
/// densities, OS and browser shares, distinct visitors and page URLs.
///
/// [`UserAgentInfo::is_bot`]: crate::enrichment::user_agent::UserAgentInfo::is_bot
pub struct StatsAggregator {
    config: AnalyzerConfig,

    // Every record
    total_traffic: u64,
    request_count: u64,
    error_count: u64,
    bot_count: u64,
    window: Option<TimeWindow>,
    referring_domains: BTreeSet<String>,
    crawler_counts: AHashMap<String, u64>,

    // Non-bot records
    human_count: u64,
    os_counts: AHashMap<OperatingSystem, u64>,
    browser_counts: AHashMap<Browser, u64>,
    visits_by_ip: AHashMap<String, u64>,
    visits_by_second: AHashMap<i64, u64>,
    /// path -> domains that led to a 200
    existing_pages: BTreeMap<String, BTreeSet<String>>,
    /// path -> domains that led to a 404
    not_found_pages: BTreeMap<String, BTreeSet<String>>,
}

impl StatsAggregator {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            total_traffic: 0,
            request_count: 0,
            error_count: 0,
            bot_count: 0,
            window: None,
            referring_domains: BTreeSet::new(),
            crawler_counts: AHashMap::new(),
            human_count: 0,
            os_counts: AHashMap::new(),
            browser_counts: AHashMap::new(),
            visits_by_ip: AHashMap::new(),
            visits_by_second: AHashMap::new(),
            existing_pages: BTreeMap::new(),
            not_found_pages: BTreeMap::new(),
        }
    }

    pub fn push(&mut self, record: &LogRecord) {
        self.total_traffic = self.total_traffic.saturating_add(record.response_size);
        self.request_count += 1;
        if record.is_error() {
            self.error_count += 1;
        }

        self.window = Some(match self.window {
            Some(window) => window.including(record.timestamp),
            None => TimeWindow::at(record.timestamp),
        });

        let domain = record.referer.url().and_then(extract_domain);
        if let Some(domain) = &domain {
            self.referring_domains.insert(domain.clone());
        }

        let tracked = &self.config.tracked_crawlers;
        if let Some(program) = record.user_agent.program.as_ref().filter(|p| tracked.contains(p)) {
            increment(&mut self.crawler_counts, program.clone());
        }

        if record.is_bot() {
            self.bot_count += 1;
            return;
        }

        //---------------------------------------------------------------------
        // Real users only
        //---------------------------------------------------------------------
        self.human_count += 1;
        increment(&mut self.os_counts, record.user_agent.os);
        increment(&mut self.browser_counts, record.user_agent.browser);
        increment(&mut self.visits_by_ip, record.client_ip.clone());
        increment(
            &mut self.visits_by_second,
            record.timestamp.and_utc().timestamp(),
        );

        let pages = match record.status {
            200 => &mut self.existing_pages,
            404 => &mut self.not_found_pages,
            _ => return,
        };
        let domain = domain.unwrap_or_else(|| self.config.default_domain.clone());
        pages
            .entry(normalize_path(&record.path))
            .or_default()
            .insert(domain);
    }

    /// Fold a partial aggregate (e.g. from another shard of the same file)
    /// into this one. Sums add, sets union, windows widen, so the result does
    /// not depend on how records were split or in which order shards merge.
    pub fn merge(&mut self, other: StatsAggregator) {
        self.total_traffic = self.total_traffic.saturating_add(other.total_traffic);
        self.request_count += other.request_count;
        self.error_count += other.error_count;
        self.bot_count += other.bot_count;
        self.human_count += other.human_count;

        self.window = match (self.window, other.window) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        };

        self.referring_domains.extend(other.referring_domains);
        merge_counts(&mut self.crawler_counts, other.crawler_counts);
        merge_counts(&mut self.os_counts, other.os_counts);
        merge_counts(&mut self.browser_counts, other.browser_counts);
        merge_counts(&mut self.visits_by_ip, other.visits_by_ip);
        merge_counts(&mut self.visits_by_second, other.visits_by_second);
        merge_pages(&mut self.existing_pages, other.existing_pages);
        merge_pages(&mut self.not_found_pages, other.not_found_pages);
    }

    //-------------------------------------------------------------------------
    // Counts
    //-------------------------------------------------------------------------

    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    pub fn human_count(&self) -> u64 {
        self.human_count
    }

    pub fn bot_count(&self) -> u64 {
        self.bot_count
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    /// Distinct client IPs among non-bot requests.
    pub fn unique_visitors(&self) -> u64 {
        self.visits_by_ip.len() as u64
    }

    pub fn time_window(&self) -> Option<TimeWindow> {
        self.window
    }

    pub fn referring_domains(&self) -> &BTreeSet<String> {
        &self.referring_domains
    }

    //-------------------------------------------------------------------------
    // Traffic
    //-------------------------------------------------------------------------

    pub fn total_traffic(&self) -> u64 {
        self.total_traffic
    }

    /// Bytes per whole hour of the observed window. A window shorter than an
    /// hour counts as one hour, so a single-instant log reports its total.
    pub fn traffic_rate_per_hour(&self) -> f64 {
        self.total_traffic as f64 / self.rate_hours()
    }

    pub fn average_visits_per_hour(&self) -> f64 {
        self.human_count as f64 / self.rate_hours()
    }

    /// 4xx and 5xx responses per hour, bots included.
    pub fn average_errors_per_hour(&self) -> f64 {
        self.error_count as f64 / self.rate_hours()
    }

    pub fn average_visits_per_user(&self) -> f64 {
        if self.visits_by_ip.is_empty() {
            return 0.0;
        }
        self.human_count as f64 / self.visits_by_ip.len() as f64
    }

    pub fn max_visits_per_second(&self) -> u64 {
        self.visits_by_second.values().copied().max().unwrap_or(0)
    }

    pub fn max_visits_by_single_ip(&self) -> u64 {
        self.visits_by_ip.values().copied().max().unwrap_or(0)
    }

    fn rate_hours(&self) -> f64 {
        rate_hours(self.window.as_ref())
    }

    //-------------------------------------------------------------------------
    // Distributions
    //-------------------------------------------------------------------------

    pub fn operating_system_share(&self) -> BTreeMap<OperatingSystem, f64> {
        shares(&self.os_counts)
    }

    pub fn browser_share(&self) -> BTreeMap<Browser, f64> {
        shares(&self.browser_counts)
    }

    /// Share of all accepted requests made by each tracked crawler. The
    /// program token must equal the tracked name exactly; bot detection plays
    /// no part.
    pub fn crawler_share(&self) -> BTreeMap<String, f64> {
        if self.request_count == 0 {
            return BTreeMap::new();
        }

        self.config
            .tracked_crawlers
            .iter()
            .map(|name| {
                let count = self.crawler_counts.get(name).copied().unwrap_or(0);
                (name.clone(), count as f64 / self.request_count as f64)
            })
            .collect()
    }

    //-------------------------------------------------------------------------
    // Pages
    //-------------------------------------------------------------------------

    /// Full URLs of pages real users reached with a 200.
    pub fn existing_full_urls(&self) -> BTreeSet<String> {
        self.full_urls(&self.existing_pages)
    }

    /// Full URLs of pages real users reached with a 404.
    pub fn not_found_full_urls(&self) -> BTreeSet<String> {
        self.full_urls(&self.not_found_pages)
    }

    fn full_urls(&self, pages: &BTreeMap<String, BTreeSet<String>>) -> BTreeSet<String> {
        let scheme = &self.config.url_scheme;

        pages
            .iter()
            .flat_map(|(path, domains)| {
                domains
                    .iter()
                    .map(move |domain| format!("{scheme}://{domain}{path}"))
            })
            .collect()
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            requests: self.request_count,
            human_requests: self.human_count,
            bot_requests: self.bot_count,
            errors: self.error_count,
            unique_visitors: self.unique_visitors(),
            window: self.window,
            total_traffic: self.total_traffic,
            traffic_rate_per_hour: self.traffic_rate_per_hour(),
            average_visits_per_hour: self.average_visits_per_hour(),
            average_errors_per_hour: self.average_errors_per_hour(),
            average_visits_per_user: self.average_visits_per_user(),
            max_visits_per_second: self.max_visits_per_second(),
            max_visits_by_single_ip: self.max_visits_by_single_ip(),
            operating_systems: self.operating_system_share(),
            browsers: self.browser_share(),
            crawlers: self.crawler_share(),
            referring_domains: self.referring_domains.clone(),
            existing_urls: self.existing_full_urls(),
            not_found_urls: self.not_found_full_urls(),
        }
    }
}

fn increment<K: Eq + Hash>(counts: &mut AHashMap<K, u64>, key: K) {
    *counts.entry(key).or_insert(0) += 1;
}

fn merge_counts<K: Eq + Hash>(into: &mut AHashMap<K, u64>, from: AHashMap<K, u64>) {
    for (key, count) in from {
        *into.entry(key).or_insert(0) += count;
    }
}

fn merge_pages(
    into: &mut BTreeMap<String, BTreeSet<String>>,
    from: BTreeMap<String, BTreeSet<String>>,
) {
    for (path, domains) in from {
        into.entry(path).or_default().extend(domains);
    }
}

fn shares<K: Copy + Ord>(counts: &AHashMap<K, u64>) -> BTreeMap<K, f64> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }

    counts
        .iter()
        .map(|(key, count)| (*key, *count as f64 / total as f64))
        .collect()
}
