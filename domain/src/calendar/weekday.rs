//! Day-of-week codes and their names.

use chrono::Weekday;
use std::collections::BTreeSet;

/// Integer day-of-week code, `0` (Sunday) through `6` (Saturday).
pub type DayCode = u8;

/// Set of day codes. Empty means "no constraint on the day axis".
pub type DaySet = BTreeSet<DayCode>;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Day code for a chrono weekday.
pub fn day_code(weekday: Weekday) -> DayCode {
    weekday.num_days_from_sunday() as DayCode
}

/// Display name for a day code, `None` outside `0..=6`.
pub fn day_name(code: DayCode) -> Option<&'static str> {
    DAY_NAMES.get(code as usize).copied()
}
