//! Time window value object

use super::weekday::{DaySet, day_code};
use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Half-open interval `[start, end)` of instants (Value Object)
///
/// Endpoints keep the offset of the reference clock they were derived from,
/// so the weekdays a window touches are the caller's local weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeWindow {
    /// Create a window, returning `None` unless `start < end`
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Window of `length` starting at `start`
    pub fn starting_at(start: DateTime<FixedOffset>, length: Duration) -> Option<Self> {
        Self::new(start, start.checked_add_signed(length)?)
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Whether `instant` falls inside the window (end-exclusive)
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let instant = instant.with_timezone(&Utc);
        instant >= self.start.with_timezone(&Utc) && instant < self.end.with_timezone(&Utc)
    }

    /// Every weekday the window touches, in the window's own offset.
    pub fn weekdays(&self) -> DaySet {
        let mut days = DaySet::new();
        let last = (self.end - Duration::nanoseconds(1)).date_naive();
        let mut date = self.start.date_naive();
        while date <= last && days.len() < 7 {
            days.insert(day_code(date.weekday()));
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }
        days
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} .. {}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
