//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod clock;
mod dataset;
mod log;
mod output;
mod router;

pub use clock::FileClockConfig;
pub use dataset::FileDatasetConfig;
pub use log::FileLogConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use router::FileRouterConfig;

use portal_bot_application::DispatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("{field}: unknown intent '{value}'")]
    UnknownIntent { field: String, value: String },

    #[error("router.keywords.{intent}: keywords cannot be empty")]
    EmptyKeyword { intent: String },

    #[error("clock.utc_offset_minutes: {0} is outside ±24h")]
    InvalidUtcOffset(i32),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Portal dataset settings
    pub dataset: FileDatasetConfig,
    /// Intent routing settings
    pub router: FileRouterConfig,
    /// Reference clock settings
    pub clock: FileClockConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Intent names in `[router]`
    /// 2. Blank keywords in `[router.keywords]`
    /// 3. The clock offset range
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.router.to_dispatch_config()?;
        self.clock.to_clock()?;
        Ok(())
    }

    /// Dispatcher configuration from the `[router]` section
    pub fn dispatch_config(&self) -> Result<DispatchConfig, ConfigValidationError> {
        self.router.to_dispatch_config()
    }
}
