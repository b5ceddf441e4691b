//! Reference clock configuration from TOML (`[clock]` section)

use super::ConfigValidationError;
use crate::clock::SystemClock;
use serde::{Deserialize, Serialize};

/// Raw clock configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClockConfig {
    /// Offset east of UTC that "today" and weekdays are judged in.
    /// Uses the host's local offset when unset.
    pub utc_offset_minutes: Option<i32>,
}

impl FileClockConfig {
    pub fn to_clock(&self) -> Result<SystemClock, ConfigValidationError> {
        match self.utc_offset_minutes {
            None => Ok(SystemClock::local()),
            Some(minutes) => SystemClock::with_offset_minutes(minutes)
                .ok_or(ConfigValidationError::InvalidUtcOffset(minutes)),
        }
    }
}
