//! Input validation rules for opening-hours data.
//!
//! Two pure validators guard interval data before it is persisted:
//!
//! - [`time_format_is_valid`] checks that a time string is exactly `HH:mm`.
//! - [`interval_order_is_valid`] checks the start/end ordering of a whole
//!   interval, with the "until midnight" exception.
//!
//! Both report failure as a boolean; neither panics or returns an error for
//! ordinary invalid input. Required-ness of fields is a separate concern
//! handled where the request is shaped.

use chrono::NaiveTime;
use tracing::debug;

use crate::models::Interval;

/// Message reported when a time string is not `HH:mm`.
pub const MSG_TIME_FORMAT: &str = "Start time must be in format HH:mm";

/// Message reported when an interval violates the ordering rule.
pub const MSG_INTERVAL_ORDER: &str = "Start time must be before end time";

/// Parse a time string under the strict `HH:mm` pattern.
///
/// Exactly five characters, zero-padded 24-hour hour and minute. Returns
/// `None` for any other shape; chrono alone would also accept single-digit
/// hours, so the shape is checked first.
fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
    {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Check that a time string conforms to `HH:mm`.
///
/// Blank input is valid: absence of a value is not this validator's concern.
pub fn time_format_is_valid(value: &str) -> bool {
    if value.trim().is_empty() {
        return true;
    }
    parse_hhmm(value).is_some()
}

/// Check the start/end ordering of one interval.
///
/// Fail-open on unparseable times: format errors are reported by
/// [`time_format_is_valid`] and must not be duplicated here. `start == end`
/// is always invalid; `end == 00:00` means the interval runs until end of
/// day and is accepted regardless of `start`; any other overnight span
/// (e.g. 22:00-02:00) is rejected.
pub fn interval_order_is_valid(interval: &Interval) -> bool {
    let (start, end) = match (parse_hhmm(&interval.start), parse_hhmm(&interval.end)) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            debug!(
                start = %interval.start,
                end = %interval.end,
                "interval times not parseable, deferring to format validation"
            );
            return true;
        }
    };

    if start == end {
        return false;
    }
    if end == NaiveTime::MIN {
        return true;
    }
    start < end
}
