use chrono::NaiveDateTime;
use serde::Serialize;

/// Earliest and latest timestamp seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn at(ts: NaiveDateTime) -> Self {
        Self { start: ts, end: ts }
    }

    pub fn including(self, ts: NaiveDateTime) -> Self {
        Self {
            start: self.start.min(ts),
            end: self.end.max(ts),
        }
    }

    pub fn union(self, other: TimeWindow) -> Self {
        self.including(other.start).including(other.end)
    }

    /// Whole hours between start and end, truncated.
    pub fn whole_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }
}

/// Denominator for every per-hour rate: whole hours in the window, floored
/// to 1 so an empty or single-instant window divides by one.
pub(crate) fn rate_hours(window: Option<&TimeWindow>) -> f64 {
    window.map_or(0, TimeWindow::whole_hours).max(1) as f64
}
