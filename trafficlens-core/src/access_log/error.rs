use thiserror::Error;

/// A line that could not be turned into a [`LogRecord`](super::LogRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed log line ({reason}): {line}")]
pub struct MalformedLineError {
    pub line: String,
    pub reason: MalformedReason,
}

impl MalformedLineError {
    pub(crate) fn new(line: &str, reason: MalformedReason) -> Self {
        Self {
            line: line.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("no space after client ip")]
    MissingClientIp,

    #[error("missing timestamp bracket")]
    MissingTimestamp,

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("missing quoted request")]
    MissingRequest,

    #[error("request '{0}' does not have method, path and protocol")]
    InvalidRequest(String),

    #[error("missing status or size after request")]
    MissingStatusOrSize,

    #[error("invalid status code '{0}'")]
    InvalidStatus(String),

    #[error("invalid response size '{0}'")]
    InvalidSize(String),

    #[error("no quoted user-agent after request")]
    MissingUserAgent,

    #[error("odd number of quotes between request and user-agent")]
    UnbalancedQuotes,
}
