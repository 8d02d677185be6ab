use crate::enrichment::user_agent::{Browser, OperatingSystem};
use crate::stats::window::TimeWindow;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Every derived metric at one point in time, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub requests: u64,
    pub human_requests: u64,
    pub bot_requests: u64,
    pub errors: u64,
    pub unique_visitors: u64,
    pub window: Option<TimeWindow>,

    pub total_traffic: u64,
    pub traffic_rate_per_hour: f64,
    pub average_visits_per_hour: f64,
    pub average_errors_per_hour: f64,
    pub average_visits_per_user: f64,
    pub max_visits_per_second: u64,
    pub max_visits_by_single_ip: u64,

    pub operating_systems: BTreeMap<OperatingSystem, f64>,
    pub browsers: BTreeMap<Browser, f64>,
    pub crawlers: BTreeMap<String, f64>,

    pub referring_domains: BTreeSet<String>,
    pub existing_urls: BTreeSet<String>,
    pub not_found_urls: BTreeSet<String>,
}
