//! Configuration file loading for portal-bot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./portal-bot.toml` or `./.portal-bot.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/portal-bot/config.toml`
//! 4. Fallback: `~/.config/portal-bot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileClockConfig, FileConfig, FileDatasetConfig, FileLogConfig,
    FileOutputConfig, FileOutputFormat, FileRouterConfig,
};
pub use loader::ConfigLoader;
