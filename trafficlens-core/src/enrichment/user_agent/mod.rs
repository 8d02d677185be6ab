mod crawler;

pub use crawler::crawler_program;

use serde::Serialize;
use std::fmt;

/// Classify a raw `User-Agent` header value.
///
/// Detection is plain substring matching in a fixed precedence order, so the
/// result is stable for any input. Empty or garbage strings classify as
/// `Other`/`Other` and not a bot.
pub fn classify(raw: &str) -> UserAgentInfo {
    UserAgentInfo {
        os: detect_os(raw),
        browser: detect_browser(raw),
        is_bot: is_bot(raw),
        program: crawler_program(raw),
        raw: raw.to_string(),
    }
}

fn detect_os(ua: &str) -> OperatingSystem {
    if ua.contains("Windows") {
        OperatingSystem::Windows
    } else if ua.contains("Mac OS") || ua.contains("Macintosh") {
        OperatingSystem::MacOs
    } else if ua.contains("Linux") {
        OperatingSystem::Linux
    } else {
        OperatingSystem::Other
    }
}

// Chromium derivatives carry "Chrome" too, so the specific brands go first.
fn detect_browser(ua: &str) -> Browser {
    if ua.contains("Firefox") {
        Browser::Firefox
    } else if ua.contains("OPR") || ua.contains("Opera") {
        Browser::Opera
    } else if ua.contains("Edg") || ua.contains("Edge") {
        Browser::Edge
    } else if ua.contains("Chrome") {
        Browser::Chrome
    } else {
        Browser::Other
    }
}

pub(crate) fn is_bot(ua: &str) -> bool {
    ua.to_ascii_lowercase().contains("bot")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentInfo {
    pub os: OperatingSystem,
    pub browser: Browser,
    pub is_bot: bool,
    /// Program token of the user-agent, e.g. `Googlebot`; see [`crawler_program`]
    pub program: Option<String>,
    /// Original header value, kept for auditing
    pub raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum OperatingSystem {
    Windows,
    #[serde(rename = "macOS")]
    MacOs,
    Linux,
    #[serde(rename = "other")]
    Other,
}

impl OperatingSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOs => "macOS",
            OperatingSystem::Linux => "Linux",
            OperatingSystem::Other => "other",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Browser {
    Firefox,
    Opera,
    Edge,
    Chrome,
    #[serde(rename = "other")]
    Other,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Firefox => "Firefox",
            Browser::Opera => "Opera",
            Browser::Edge => "Edge",
            Browser::Chrome => "Chrome",
            Browser::Other => "other",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
