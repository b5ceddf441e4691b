//! Clock port
//!
//! Time expressions ("3pm", "tomorrow") are resolved against the instant this
//! port returns, so a fixed clock makes extraction fully reproducible.

use chrono::{DateTime, FixedOffset};

/// Source of the reference instant for a query
pub trait Clock: Send + Sync {
    /// Current instant, in the offset the caller's weekdays are judged in
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Clock frozen at one instant, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant = DateTime::parse_from_rfc3339("2026-10-19T10:00:00+07:00").unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
