//! Infrastructure layer for portal-bot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clock;
pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use clock::SystemClock;
pub use config::{
    ConfigLoader, ConfigValidationError, FileClockConfig, FileConfig, FileDatasetConfig,
    FileLogConfig, FileOutputConfig, FileOutputFormat, FileRouterConfig,
};
pub use logging::{HistoryEntry, HistoryError, JsonlConversationLogger, read_history};
pub use store::{Dataset, DatasetError, InMemoryPortalStore};
