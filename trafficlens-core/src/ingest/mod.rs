mod error;

pub use error::IngestError;

use crate::access_log::parse_line;
use crate::conf::types::IngestConfig;
use crate::stats::StatsAggregator;
use serde::Serialize;
use std::io::BufRead;

/// What happened to the lines of one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub lines: u64,
    pub blank: u64,
    pub accepted: u64,
    pub malformed: u64,
}

/// Feed every line of `reader` through the parser into `agg`.
///
/// Lines are trimmed and blank ones skipped. Invalid UTF-8 is decoded
/// lossily rather than failing the run. Malformed lines are counted and
/// skipped. A line longer than `cfg.max_line_length` characters aborts the
/// run with [`IngestError::LineTooLong`]; records pushed before it stay in
/// the aggregator.
pub fn ingest<R: BufRead>(
    mut reader: R,
    agg: &mut StatsAggregator,
    cfg: &IngestConfig,
) -> Result<IngestSummary, IngestError> {
    let mut summary = IngestSummary::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| IngestError::Read {
                line_number: line_number + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;
        summary.lines += 1;

        // Bytes that are not UTF-8 become U+FFFD; the line still parses.
        let line = String::from_utf8_lossy(strip_line_ending(&buf));

        let length = line.chars().count();
        if length > cfg.max_line_length {
            return Err(IngestError::LineTooLong {
                line_number,
                length,
                limit: cfg.max_line_length,
            });
        }

        let line = line.trim();
        if line.is_empty() {
            summary.blank += 1;
            continue;
        }

        match parse_line(line) {
            Ok(record) => {
                agg.push(&record);
                summary.accepted += 1;
            }
            Err(err) => {
                tracing::debug!(line_number, reason = %err.reason, "skipping malformed line");
                summary.malformed += 1;
            }
        }
    }

    Ok(summary)
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
