//! Dataset configuration from TOML (`[dataset]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw dataset configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatasetConfig {
    /// Path to the portal dataset file
    pub path: Option<PathBuf>,
}
