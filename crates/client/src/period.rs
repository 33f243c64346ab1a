//! Relative time periods for the search window.
//!
//! Responsibilities:
//! - Parse period expressions (`now`, `15m`, `1h30m`, `1.5d`, `-2w`) into durations.
//! - Resolve a period to an epoch-millisecond timestamp relative to "now".
//! - Format the local UTC offset for the date histogram.
//!
//! Invariants:
//! - Empty input and `now` resolve to "now".
//! - `M` is 30 days and `y` is 365 days; `m` is always minutes.
//! - A period is subtracted from "now"; a leading `-` moves the bound into the future.

use chrono::{Local, Offset, Utc};

use crate::error::{ClientError, Result};

const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60.0 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: f64 = 60.0 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;

/// Current time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Resolves `input` to epoch milliseconds relative to `now`.
///
/// # Errors
/// Returns `InvalidPeriod` when `input` is not `now` or a period expression.
pub fn resolve_period(input: &str, now: i64) -> Result<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "now" {
        return Ok(now);
    }
    let millis = parse_period_millis(trimmed)?;
    now.checked_sub(millis)
        .ok_or_else(|| ClientError::InvalidPeriod {
            input: input.to_string(),
            reason: "period is out of range".to_string(),
        })
}

/// Parses a signed period expression into milliseconds.
pub fn parse_period_millis(input: &str) -> Result<i64> {
    let invalid = |reason: &str| ClientError::InvalidPeriod {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (sign, rest) = match input.as_bytes().first() {
        Some(b'-') => (-1.0, &input[1..]),
        Some(b'+') => (1.0, &input[1..]),
        _ => (1.0, input),
    };

    if rest.is_empty() {
        return Err(invalid("missing amount"));
    }
    // "0" is the only unit-less period accepted
    if rest == "0" {
        return Ok(0);
    }

    let mut total = 0.0;
    let mut remaining = rest;
    while !remaining.is_empty() {
        let number_len = remaining
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(remaining.len());
        if number_len == 0 {
            return Err(invalid("expected a number"));
        }
        let amount: f64 = remaining[..number_len]
            .parse()
            .map_err(|_| invalid("malformed number"))?;
        remaining = &remaining[number_len..];

        let unit_len = remaining
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(remaining.len());
        if unit_len == 0 {
            return Err(invalid("missing unit"));
        }
        let unit_millis = unit_millis(&remaining[..unit_len])
            .ok_or_else(|| invalid("unknown unit, expected one of ms, s, m, h, d, w, M, y"))?;
        remaining = &remaining[unit_len..];

        total += amount * unit_millis;
    }

    if !total.is_finite() || total > i64::MAX as f64 {
        return Err(invalid("period is too large"));
    }

    Ok((sign * total).round() as i64)
}

fn unit_millis(unit: &str) -> Option<f64> {
    let millis = match unit {
        "ms" => 1.0,
        "s" => MILLIS_PER_SECOND,
        "m" => MILLIS_PER_MINUTE,
        "h" => MILLIS_PER_HOUR,
        "d" => MILLIS_PER_DAY,
        "w" => 7.0 * MILLIS_PER_DAY,
        "M" => 30.0 * MILLIS_PER_DAY,
        "y" => 365.0 * MILLIS_PER_DAY,
        _ => return None,
    };
    Some(millis)
}

/// The local UTC offset as `Z` or `+HH:MM`/`-HH:MM`.
pub fn local_time_zone() -> String {
    format_offset(Local::now().offset().fix().local_minus_utc())
}

fn format_offset(offset_seconds: i32) -> String {
    if offset_seconds == 0 {
        return "Z".to_string();
    }
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let minutes = offset_seconds.abs() / 60;
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}
