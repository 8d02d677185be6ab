use crate::enrichment::user_agent::UserAgentInfo;
use chrono::NaiveDateTime;
use std::fmt;

/// Rendering of a missing referer.
pub const NO_REFERER: &str = "no-referer";

/// One successfully parsed access-log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub client_ip: String,
    /// Local time as written in the log; the zone offset is discarded
    pub timestamp: NaiveDateTime,
    pub method: HttpMethod,
    pub path: String,
    pub status: u16,
    /// Body bytes; a `-` in the log is recorded as 0
    pub response_size: u64,
    pub referer: Referer,
    pub user_agent: UserAgentInfo,
}

impl LogRecord {
    pub fn is_bot(&self) -> bool {
        self.user_agent.is_bot
    }

    /// 4xx and 5xx responses.
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
    Trace,
    /// Anything else that appeared in the method position
    Unknown(String),
}

impl HttpMethod {
    /// Case-sensitive match against the known verbs.
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            "PATCH" => HttpMethod::Patch,
            "TRACE" => HttpMethod::Trace,
            other => HttpMethod::Unknown(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, HttpMethod::Unknown(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Unknown(token) => token,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Referer {
    Absent,
    Url(String),
}

impl Referer {
    /// `-` and the empty string both mean "no referer" in combined logs.
    pub fn from_field(value: &str) -> Self {
        match value {
            "" | "-" => Referer::Absent,
            url => Referer::Url(url.to_string()),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Referer::Absent => None,
            Referer::Url(url) => Some(url),
        }
    }

    pub fn as_str(&self) -> &str {
        self.url().unwrap_or(NO_REFERER)
    }
}

impl fmt::Display for Referer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
