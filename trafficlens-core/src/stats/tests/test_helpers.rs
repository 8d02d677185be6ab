use crate::access_log::{HttpMethod, LogRecord, Referer, TIMESTAMP_FORMAT};
use crate::conf::types::AnalyzerConfig;
use crate::enrichment::user_agent::classify;
use crate::stats::StatsAggregator;
use chrono::NaiveDateTime;

pub(crate) const HUMAN_WINDOWS: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
pub(crate) const HUMAN_LINUX: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
pub(crate) const GOOGLEBOT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
pub(crate) const YANDEXBOT: &str = "Mozilla/5.0 (compatible; YandexBot/3.0; +http://yandex.com/bots)";

pub(crate) struct RecordBuilder {
    client_ip: String,
    timestamp: NaiveDateTime,
    path: String,
    status: u16,
    response_size: u64,
    referer: Referer,
    user_agent: String,
}

/// A human GET of `/` from 10.0.0.1 at 10/Oct/2023:13:00:00 with a 200.
pub(crate) fn record() -> RecordBuilder {
    RecordBuilder {
        client_ip: "10.0.0.1".to_string(),
        timestamp: ts("10/Oct/2023:13:00:00"),
        path: "/".to_string(),
        status: 200,
        response_size: 0,
        referer: Referer::Absent,
        user_agent: HUMAN_WINDOWS.to_string(),
    }
}

impl RecordBuilder {
    pub(crate) fn ip(mut self, ip: &str) -> Self {
        self.client_ip = ip.to_string();
        self
    }

    pub(crate) fn at(mut self, stamp: &str) -> Self {
        self.timestamp = ts(stamp);
        self
    }

    pub(crate) fn path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub(crate) fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub(crate) fn size(mut self, size: u64) -> Self {
        self.response_size = size;
        self
    }

    pub(crate) fn referer(mut self, referer: &str) -> Self {
        self.referer = Referer::from_field(referer);
        self
    }

    pub(crate) fn agent(mut self, ua: &str) -> Self {
        self.user_agent = ua.to_string();
        self
    }

    pub(crate) fn build(self) -> LogRecord {
        LogRecord {
            client_ip: self.client_ip,
            timestamp: self.timestamp,
            method: HttpMethod::Get,
            path: self.path,
            status: self.status,
            response_size: self.response_size,
            referer: self.referer,
            user_agent: classify(&self.user_agent),
        }
    }
}

pub(crate) fn ts(stamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).expect("invalid test timestamp")
}

pub(crate) fn aggregate(records: &[LogRecord]) -> StatsAggregator {
    let mut agg = StatsAggregator::new(AnalyzerConfig::default());
    for record in records {
        agg.push(record);
    }
    agg
}
