//! Traffic statistics
//!
//! Parsed records flow into a [`StatsAggregator`], which keeps running totals
//! and frequency tables. Queries derive shares, rates and URL sets from that
//! state on demand; [`StatsAggregator::snapshot`] collects all of them into a
//! [`StatsSnapshot`] for rendering.
//!
//! The overall data processing architecture is:
//!
//! line
//! parse_line
//! LogRecord
//! StatsAggregator
//! StatsSnapshot
//! render_text
//!
//! Rates never divide by zero: per-hour figures use at least one hour, shares
//! over nothing are empty, and per-user averages over nobody are zero.

mod aggregation;
mod domain;
mod snapshot;
mod window;

pub use aggregation::StatsAggregator;
pub use domain::{extract_domain, normalize_path};
pub use snapshot::StatsSnapshot;
pub use window::TimeWindow;
