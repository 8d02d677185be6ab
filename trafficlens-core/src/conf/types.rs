use serde::{Deserialize, Serialize};

/// Name of the config file inside a config directory.
pub const CONFIG_FILE_NAME: &str = "trafficlens.hcl";

/// Line ceiling used when no config says otherwise.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024;

/// Top-level contents of `trafficlens.hcl`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrafficlensConfig {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub ingest: IngestConfig,
}

/// Settings handed to the statistics aggregator at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Host used to build page URLs when a request has no usable referer
    #[serde(default = "default_domain")]
    pub default_domain: String,

    /// `http` or `https`
    #[serde(default = "default_url_scheme")]
    pub url_scheme: String,

    /// Crawler product tokens reported in the crawler share
    #[serde(default = "default_tracked_crawlers")]
    pub tracked_crawlers: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            default_domain: default_domain(),
            url_scheme: default_url_scheme(),
            tracked_crawlers: default_tracked_crawlers(),
        }
    }
}

fn default_domain() -> String {
    "example.com".to_string()
}

fn default_url_scheme() -> String {
    "https".to_string()
}

fn default_tracked_crawlers() -> Vec<String> {
    vec!["Googlebot".to_string(), "YandexBot".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestConfig {
    /// Longest accepted line, in characters. A longer line aborts the file.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
        }
    }
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}
