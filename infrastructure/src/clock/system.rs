//! Wall-clock implementation of the [`Clock`] port.

use chrono::{DateTime, FixedOffset, Local, Utc};
use portal_bot_application::ports::clock::Clock;

/// Seconds in a day; offsets must stay strictly inside ±1 day.
const SECONDS_PER_DAY: i32 = 24 * 60 * 60;

/// Reads the system time, judged in a fixed UTC offset or in the host's
/// local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    /// Clock in the host's local offset
    pub fn local() -> Self {
        Self::default()
    }

    /// Clock in a fixed offset east of UTC. Returns `None` when the offset is
    /// not within ±24h.
    pub fn with_offset_minutes(minutes: i32) -> Option<Self> {
        let seconds = minutes.checked_mul(60)?;
        if seconds.abs() >= SECONDS_PER_DAY {
            return None;
        }
        FixedOffset::east_opt(seconds).map(|offset| Self {
            offset: Some(offset),
        })
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        }
    }
}
