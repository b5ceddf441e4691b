//! Calendar vocabulary shared by extraction, lookup and rendering.
//!
//! Day codes follow the portal's storage convention: Sunday = 0 to Saturday = 6.

pub mod minute_of_day;
pub mod time_window;
pub mod weekday;

pub use minute_of_day::{format_minute_of_day, format_minute_range, parse_minute_of_day};
pub use time_window::TimeWindow;
pub use weekday::{DayCode, DaySet, day_code, day_name};
