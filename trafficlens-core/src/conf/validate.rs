use crate::conf::error::ConfigError;
use crate::conf::types::TrafficlensConfig;

const SUPPORTED_SCHEMES: &[&str] = &["http", "https"];

pub fn validate_config(cfg: &TrafficlensConfig) -> Result<(), ConfigError> {
    let analyzer = &cfg.analyzer;

    let domain = analyzer.default_domain.trim();
    if domain.is_empty() {
        return Err(ConfigError::invalid(
            "analyzer.default_domain",
            "must not be empty",
        ));
    }
    if !domain.contains('.') {
        return Err(ConfigError::invalid(
            "analyzer.default_domain",
            format!("'{domain}' is not a domain name"),
        ));
    }
    if domain.contains('/') || domain.contains("://") {
        return Err(ConfigError::invalid(
            "analyzer.default_domain",
            "must be a bare host without scheme or path",
        ));
    }

    if !SUPPORTED_SCHEMES.contains(&analyzer.url_scheme.as_str()) {
        return Err(ConfigError::invalid(
            "analyzer.url_scheme",
            format!("'{}' is not http or https", analyzer.url_scheme),
        ));
    }

    if analyzer.tracked_crawlers.iter().any(|c| c.trim().is_empty()) {
        return Err(ConfigError::invalid(
            "analyzer.tracked_crawlers",
            "crawler names must not be empty",
        ));
    }

    if cfg.ingest.max_line_length == 0 {
        return Err(ConfigError::invalid(
            "ingest.max_line_length",
            "must be greater than zero",
        ));
    }

    Ok(())
}
