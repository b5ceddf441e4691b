//! Time expressions and the window they describe.
//!
//! Recognized expressions, most specific first:
//!
//! 1. Clock times: `3pm`, `3 pm`, `3:30pm`, `15:00` → one hour from that time
//! 2. Parts of the day: `morning` 06–12, `afternoon` 12–18, `evening`/`tonight` 18–24
//! 3. Weeks: `this week`, `next week` → Monday 00:00 for seven days
//! 4. Relative days alone: `today`, `tomorrow`, `yesterday` → the whole day
//!
//! Expressions 1 and 2 land on the anchor date: today, unless a relative day
//! word moves it.

use crate::calendar::TimeWindow;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static ANCHOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(today|tonight|tomorrow|yesterday)\b").expect("valid anchor pattern")
});

static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?::([0-5]\d))?\s*(am|pm)\b|\b(\d{1,2}):([0-5]\d)\b")
        .expect("valid clock pattern")
});

static DAY_PART_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(morning|afternoon|evening|tonight)\b").expect("valid day part pattern")
});

static WEEK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(this|next)\s+week\b").expect("valid week pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    fn parse(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "morning" => Some(DayPart::Morning),
            "afternoon" => Some(DayPart::Afternoon),
            "evening" | "tonight" => Some(DayPart::Evening),
            _ => None,
        }
    }

    /// Start and end hour on the anchor date
    fn hours(self) -> (u32, u32) {
        match self {
            DayPart::Morning => (6, 12),
            DayPart::Afternoon => (12, 18),
            DayPart::Evening => (18, 24),
        }
    }
}

/// Derive the time window described by `text`, relative to `now`.
///
/// Returns `None` when the text has no time expression.
pub fn extract_time_window(text: &str, now: DateTime<FixedOffset>) -> Option<TimeWindow> {
    let shift = anchor_shift(text);
    let anchor = now
        .date_naive()
        .checked_add_signed(Duration::days(shift.unwrap_or(0)))?;
    let offset = *now.offset();

    if let Some((hour, minute)) = clock_time(text) {
        let start = local(offset, anchor.and_hms_opt(hour, minute, 0)?)?;
        return TimeWindow::starting_at(start, Duration::hours(1));
    }

    if let Some(part) = day_part(text) {
        let (from, to) = part.hours();
        let start = local(offset, anchor.and_hms_opt(from, 0, 0)?)?;
        return TimeWindow::starting_at(start, Duration::hours(i64::from(to - from)));
    }

    if let Some(weeks_ahead) = week(text) {
        let monday = week_start(anchor)?.checked_add_signed(Duration::weeks(weeks_ahead))?;
        let start = local(offset, monday.and_hms_opt(0, 0, 0)?)?;
        return TimeWindow::starting_at(start, Duration::days(7));
    }

    if shift.is_some() {
        let start = local(offset, anchor.and_hms_opt(0, 0, 0)?)?;
        return TimeWindow::starting_at(start, Duration::days(1));
    }

    None
}

/// Days between today and the anchor named in the text, if any.
fn anchor_shift(text: &str) -> Option<i64> {
    let word = ANCHOR_PATTERN.find(text)?.as_str().to_lowercase();
    match word.as_str() {
        "tomorrow" => Some(1),
        "yesterday" => Some(-1),
        _ => Some(0),
    }
}

/// First well-formed clock time in the text as (hour, minute).
fn clock_time(text: &str) -> Option<(u32, u32)> {
    CLOCK_PATTERN.captures_iter(text).find_map(|caps| {
        if let Some(meridiem) = caps.get(3) {
            twelve_hour(&caps, meridiem.as_str())
        } else {
            let hour = number(&caps, 4)?;
            let minute = number(&caps, 5)?;
            (hour <= 23).then_some((hour, minute))
        }
    })
}

fn twelve_hour(caps: &Captures<'_>, meridiem: &str) -> Option<(u32, u32)> {
    let hour = number(caps, 1)?;
    let minute = number(caps, 2).unwrap_or(0);
    if !(1..=12).contains(&hour) {
        return None;
    }
    let pm = meridiem.eq_ignore_ascii_case("pm");
    Some((hour % 12 + if pm { 12 } else { 0 }, minute))
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn day_part(text: &str) -> Option<DayPart> {
    DayPart::parse(DAY_PART_PATTERN.find(text)?.as_str())
}

/// Weeks ahead of the anchor week (`this` = 0, `next` = 1).
fn week(text: &str) -> Option<i64> {
    let caps = WEEK_PATTERN.captures(text)?;
    let which = caps.get(1)?.as_str();
    Some(if which.eq_ignore_ascii_case("next") { 1 } else { 0 })
}

fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::days(i64::from(
        date.weekday().num_days_from_monday(),
    )))
}

fn local(offset: FixedOffset, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    offset.from_local_datetime(&naive).single()
}
