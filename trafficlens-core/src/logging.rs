use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Set when diagnostics should be emitted as JSON lines.
pub const LOG_JSON_ENV: &str = "TRAFFICLENS_LOG_JSON";

/// Initialize the logging system with environment-based filtering
///
/// This function sets up the logging infrastructure using tracing-subscriber:
/// - Uses `RUST_LOG` for level filtering (defaults to "warn" if not set)
/// - Writes to stderr so the report on stdout stays clean
/// - Switches to flattened JSON output when `TRAFFICLENS_LOG_JSON` is set
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if std::env::var(LOG_JSON_ENV).is_ok() {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .init();
    }
}

pub fn default_output_mode() -> OutputMode {
    if io::stdout().is_terminal() {
        OutputMode::Pretty
    } else {
        OutputMode::Plain
    }
}

/// How the analysis report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Colored text
    Pretty,
    Plain,
    Json,
}
