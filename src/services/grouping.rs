//! Opening-hours grouping engine.
//!
//! Compresses a 7-day schedule into human-readable groups of days that share
//! identical opening hours, e.g. "Monday - Friday: 09:00 - 17:00". Pure and
//! stateless: one read-only pass over the schedule, no side effects, no
//! failure modes. Malformed times never reach this module; the validators in
//! [`crate::validation`] reject them on the write path.

use serde::{Deserialize, Serialize};

use crate::models::{DaySchedule, Weekday};

/// Description list for a day with no intervals.
const CLOSED: &str = "closed";

/// One group of consecutive-signature days in the grouped view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningGroup {
    /// "Monday" for a single day, "Monday - Friday" for a range.
    #[serde(rename = "day")]
    pub day_range: String,
    /// Interval descriptions in start-time order, or `["closed"]`.
    pub intervals: Vec<String>,
}

/// Group a weekly schedule into days sharing identical opening hours.
///
/// Walks `day_order` once. Each day gets a signature: `["closed"]` when it
/// has no intervals, otherwise its intervals sorted by start time and
/// rendered `"{start} - {end}"`. Days with equal signatures land in the same
/// group, created in first-seen order; the output is ordered by the week
/// index of each group's first day.
///
/// A multi-day label uses the first and last day appended to the group, not
/// the calendar span. Non-contiguous days with an identical signature
/// (Monday and Wednesday closed, Tuesday open) therefore label as
/// "Monday - Wednesday" even though Tuesday is excluded. Known quirk of the
/// upstream behavior, kept verbatim.
pub fn group_schedule(schedule: &DaySchedule, day_order: &[Weekday]) -> Vec<OpeningGroup> {
    // key, days sharing it (append order), descriptions from first occurrence
    let mut buckets: Vec<(String, Vec<Weekday>, Vec<String>)> = Vec::new();

    for &day in day_order {
        let descriptions = day_signature(schedule, day);
        let key = descriptions.join(", ");

        match buckets.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, days, _)) => days.push(day),
            None => buckets.push((key, vec![day], descriptions)),
        }
    }

    buckets.sort_by_key(|(_, days, _)| week_index(day_order, days[0]));

    buckets
        .into_iter()
        .map(|(_, days, descriptions)| OpeningGroup {
            day_range: format_days(&days),
            intervals: descriptions,
        })
        .collect()
}

/// Interval signature of one day: ordered descriptions or `["closed"]`.
fn day_signature(schedule: &DaySchedule, day: Weekday) -> Vec<String> {
    let intervals = schedule.intervals_for(day);
    if intervals.is_empty() {
        return vec![CLOSED.to_string()];
    }

    let mut sorted: Vec<_> = intervals.iter().collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start));
    sorted
        .iter()
        .map(|interval| format!("{} - {}", interval.start, interval.end))
        .collect()
}

fn week_index(day_order: &[Weekday], day: Weekday) -> usize {
    day_order
        .iter()
        .position(|&d| d == day)
        .unwrap_or(usize::MAX)
}

/// "Monday" for a single day, "Monday - Friday" for first/last of a group.
fn format_days(days: &[Weekday]) -> String {
    match days {
        [single] => single.to_string(),
        [first, .., last] => format!("{} - {}", first, last),
        [] => String::new(),
    }
}
