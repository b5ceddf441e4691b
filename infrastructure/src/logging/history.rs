//! Bot history: replays a caller's past exchanges from the JSONL
//! conversation log.

use chrono::{DateTime, Utc};
use portal_bot_domain::{CallerId, Intent, ResponseEntry};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to read conversation log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One past exchange, as recorded by the `exchange` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub caller: CallerId,
    pub text: String,
    pub intent: Intent,
    #[serde(default)]
    pub entries: Vec<ResponseEntry>,
}

#[derive(Deserialize)]
struct RecordType {
    #[serde(rename = "type")]
    event_type: String,
}

/// The caller's last `limit` exchanges, oldest first.
///
/// A missing log is an empty history. Lines that are not exchange records
/// (other event types, malformed JSON) are skipped.
pub fn read_history(
    path: &Path,
    caller: CallerId,
    limit: usize,
) -> Result<Vec<HistoryEntry>, HistoryError> {
    let io_error = |source: std::io::Error| HistoryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_error(e)),
    };

    if limit == 0 {
        return Ok(Vec::new());
    }
    let mut recent = VecDeque::with_capacity(limit);

    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(io_error)?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RecordType>(&line) {
            Ok(record) if record.event_type == "exchange" => {}
            Ok(_) => continue,
            Err(e) => {
                warn!("Skipping line {} of {}: {}", number + 1, path.display(), e);
                continue;
            }
        }
        let entry: HistoryEntry = match serde_json::from_str(&line) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping line {} of {}: {}", number + 1, path.display(), e);
                continue;
            }
        };
        if entry.caller != caller {
            continue;
        }
        if recent.len() == limit {
            recent.pop_front();
        }
        recent.push_back(entry);
    }

    Ok(recent.into())
}
