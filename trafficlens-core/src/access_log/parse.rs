use crate::access_log::error::{MalformedLineError, MalformedReason};
use crate::access_log::types::{HttpMethod, LogRecord, Referer};
use crate::enrichment::user_agent::classify;
use chrono::NaiveDateTime;

/// `10/Oct/2023:13:55:36`, English month abbreviations only.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// Parse one combined-log-format line.
///
/// Fields are located positionally rather than with a grammar:
///
/// 1. client ip: everything before the first space
/// 2. timestamp: between the first `[` and the first `]`
/// 3. request: between the first pair of `"`
/// 4. status and size: the first two tokens after the request
/// 5. referer and user-agent: the last two quoted fields, found by scanning
///    quotes backwards from the end of the line
///
/// The referer is optional. A line whose only quoted field after the request
/// is the user-agent has `Referer::Absent`.
///
/// Quote characters embedded inside the referer or user-agent values are not
/// escaped in combined logs and will shift the backward scan. Such lines still
/// parse, but with the wrong field boundaries.
pub fn parse_line(line: &str) -> Result<LogRecord, MalformedLineError> {
    let fail = |reason: MalformedReason| MalformedLineError::new(line, reason);

    //-------------------------------------------------------------------------
    // Client ip
    //-------------------------------------------------------------------------
    let client_ip = match line.split_once(' ') {
        Some((ip, _)) if !ip.is_empty() => ip,
        _ => return Err(fail(MalformedReason::MissingClientIp)),
    };

    //-------------------------------------------------------------------------
    // Timestamp
    //-------------------------------------------------------------------------
    let (ts_open, ts_close) = match (line.find('['), line.find(']')) {
        (Some(open), Some(close)) if open < close => (open, close),
        _ => return Err(fail(MalformedReason::MissingTimestamp)),
    };
    let timestamp = parse_timestamp(&line[ts_open + 1..ts_close]).map_err(fail)?;

    //-------------------------------------------------------------------------
    // Request line
    //-------------------------------------------------------------------------
    let req_open = line
        .find('"')
        .ok_or_else(|| fail(MalformedReason::MissingRequest))?;
    let req_close = line[req_open + 1..]
        .find('"')
        .map(|i| req_open + 1 + i)
        .ok_or_else(|| fail(MalformedReason::MissingRequest))?;

    let request = &line[req_open + 1..req_close];
    let mut tokens = request.splitn(3, ' ');
    let (Some(method), Some(path), Some(_protocol)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(fail(MalformedReason::InvalidRequest(request.to_string())));
    };

    //-------------------------------------------------------------------------
    // Status and size
    //-------------------------------------------------------------------------
    let after_request = line[req_close + 1..].trim();
    let mut tokens = after_request.splitn(3, ' ');
    let (Some(status), Some(size)) = (tokens.next(), tokens.next()) else {
        return Err(fail(MalformedReason::MissingStatusOrSize));
    };
    let status = parse_status(status).map_err(fail)?;
    let response_size = parse_size(size).map_err(fail)?;

    //-------------------------------------------------------------------------
    // Referer and user-agent
    //-------------------------------------------------------------------------
    let (referer, user_agent) = trailing_quoted_fields(line, req_close).map_err(fail)?;

    Ok(LogRecord {
        client_ip: client_ip.to_string(),
        timestamp,
        method: HttpMethod::from_token(method),
        path: path.to_string(),
        status,
        response_size,
        referer: referer.map_or(Referer::Absent, Referer::from_field),
        user_agent: classify(user_agent),
    })
}

fn parse_timestamp(field: &str) -> Result<NaiveDateTime, MalformedReason> {
    // `10/Oct/2023:13:55:36 -0700`: the zone is dropped, local time is kept.
    let stamp = field.split_once(' ').map_or(field, |(stamp, _zone)| stamp);

    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .map_err(|_| MalformedReason::InvalidTimestamp(field.to_string()))
}

fn parse_status(token: &str) -> Result<u16, MalformedReason> {
    match token.parse::<u16>() {
        Ok(status) if (100..=999).contains(&status) => Ok(status),
        _ => Err(MalformedReason::InvalidStatus(token.to_string())),
    }
}

fn parse_size(token: &str) -> Result<u64, MalformedReason> {
    if token == "-" {
        return Ok(0);
    }
    token
        .parse::<u64>()
        .map_err(|_| MalformedReason::InvalidSize(token.to_string()))
}

/// Locate `(referer, user_agent)` by walking quotes backwards from the end.
///
/// Every quote considered must sit after `req_close`, the request's closing
/// quote. The user-agent is mandatory. The referer is present only when a
/// complete quoted field sits between the request and the user-agent.
fn trailing_quoted_fields(
    line: &str,
    req_close: usize,
) -> Result<(Option<&str>, &str), MalformedReason> {
    let ua_close = line.rfind('"').unwrap_or(req_close);
    let ua_open = line[..ua_close].rfind('"').unwrap_or(req_close);

    if ua_open <= req_close {
        return Err(MalformedReason::MissingUserAgent);
    }
    let user_agent = &line[ua_open + 1..ua_close];

    let Some(ref_close) = line[..ua_open].rfind('"').filter(|i| *i > req_close) else {
        return Ok((None, user_agent));
    };

    match line[..ref_close].rfind('"') {
        Some(ref_open) if ref_open > req_close => {
            Ok((Some(&line[ref_open + 1..ref_close]), user_agent))
        }
        _ => Err(MalformedReason::UnbalancedQuotes),
    }
}
