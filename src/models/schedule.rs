//! Weekly opening-hours schedule types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::weekday::Weekday;

/// A single opening interval within one day.
///
/// `start` and `end` are wall-clock times kept as their validated `HH:mm`
/// string form; lexicographic order on valid values equals chronological
/// order. `kind` is a free-form label ("open", "lunch-break", ...) that the
/// grouping engine does not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Interval {
    pub fn new(start: impl Into<String>, end: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            kind: kind.into(),
        }
    }
}

/// Per-day interval lists for one place.
///
/// A day with no intervals is closed. The map is keyed by [`Weekday`] so
/// iteration and serialization follow the canonical Monday-first order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule(BTreeMap<Weekday, Vec<Interval>>);

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interval to a day.
    pub fn insert(&mut self, day: Weekday, interval: Interval) {
        self.0.entry(day).or_default().push(interval);
    }

    /// Intervals for a day; empty slice when the day is closed.
    pub fn intervals_for(&self, day: Weekday) -> &[Interval] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days that carry at least one interval, in canonical order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[Interval])> {
        self.0.iter().map(|(day, intervals)| (*day, intervals.as_slice()))
    }

    /// True when no day carries an interval.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

impl FromIterator<(Weekday, Vec<Interval>)> for DaySchedule {
    fn from_iter<I: IntoIterator<Item = (Weekday, Vec<Interval>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
