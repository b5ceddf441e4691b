//! Conversation log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw log configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL file exchanges are appended to; disabled when unset
    pub conversation_log: Option<PathBuf>,
}
