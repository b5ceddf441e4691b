//! Minute-of-day rendering for class slots.

/// Minutes in a day; valid minute-of-day values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Render a minute-of-day value as `HH:MM`.
///
/// Returns `None` when the value does not fit in a single day.
pub fn format_minute_of_day(minutes: u16) -> Option<String> {
    if minutes >= MINUTES_PER_DAY {
        return None;
    }
    Some(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// Parse `HH:MM` (24-hour) into a minute-of-day value.
pub fn parse_minute_of_day(text: &str) -> Option<u16> {
    let (hours, minutes) = text.trim().split_once(':')?;
    if minutes.len() != 2 {
        return None;
    }
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Render a start/end pair as `HH:MM - HH:MM`.
pub fn format_minute_range(start: u16, end: u16) -> Option<String> {
    let start = format_minute_of_day(start)?;
    let end = format_minute_of_day(end)?;
    Some(format!("{} - {}", start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minute_of_day() {
        assert_eq!(format_minute_of_day(0).as_deref(), Some("00:00"));
        assert_eq!(format_minute_of_day(450).as_deref(), Some("07:30"));
        assert_eq!(format_minute_of_day(1439).as_deref(), Some("23:59"));
    }

    #[test]
    fn test_out_of_range_minutes_are_rejected() {
        assert!(format_minute_of_day(1440).is_none());
        assert!(format_minute_range(480, 1500).is_none());
    }

    #[test]
    fn test_parse_minute_of_day() {
        assert_eq!(parse_minute_of_day("08:00"), Some(480));
        assert_eq!(parse_minute_of_day(" 7:30 "), Some(450));
        assert_eq!(parse_minute_of_day("24:00"), None);
        assert_eq!(parse_minute_of_day("08:5"), None);
        assert_eq!(parse_minute_of_day("noon"), None);
    }

    #[test]
    fn test_format_minute_range() {
        assert_eq!(
            format_minute_range(480, 580).as_deref(),
            Some("08:00 - 09:40")
        );
    }
}
