//! Raw TOML dataset types
//!
//! A dataset is the relational snapshot the in-memory store serves:
//!
//! ```toml
//! offered = ["Algorithms", "Databases", "Networks"]
//!
//! [[schedules]]
//! schedule_id = 10
//! course_name = "Algorithms"
//! day = 1                  # Sunday = 0 to Saturday = 6
//! start = "08:00"
//! end = "09:40"
//! place = "R101"
//!
//! [[enrollments]]
//! caller = 1
//! schedule_id = 10
//!
//! [[assistants]]
//! assistant_id = 7
//! name = "Alice"
//! line_id = "alice"
//! schedule_id = 10
//!
//! [[information]]
//! id = 1
//! schedule_id = 10
//! title = "Quiz moved"
//! created_at = "2026-10-19T02:00:00Z"
//!
//! [[assignments]]
//! id = 5
//! schedule_id = 10
//! name = "Sorting"
//! due_date = "2026-10-20T10:00:00Z"
//!
//! [[grades]]
//! caller = 1
//! assignment_id = 5
//! score = 85.5
//! updated_at = "2026-10-01T00:00:00Z"
//! ```

use chrono::{DateTime, Utc};
use portal_bot_domain::DayCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or resolving a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: i64 },

    #[error("{kind} {id} refers to unknown schedule {schedule_id}")]
    UnknownSchedule {
        kind: &'static str,
        id: i64,
        schedule_id: i64,
    },

    #[error("Grade for caller {caller} refers to unknown assignment {assignment_id}")]
    UnknownAssignment { caller: i64, assignment_id: i64 },

    #[error("Invalid slot for schedule {schedule_id}: {reason}")]
    InvalidSlot { schedule_id: i64, reason: String },
}

/// Complete dataset (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Course catalogue; derived from `schedules` when empty
    pub offered: Vec<String>,
    pub schedules: Vec<DatasetSchedule>,
    pub enrollments: Vec<DatasetEnrollment>,
    pub assistants: Vec<DatasetAssistant>,
    pub information: Vec<DatasetInformation>,
    pub assignments: Vec<DatasetAssignment>,
    pub grades: Vec<DatasetGrade>,
}

/// A weekly class slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSchedule {
    pub schedule_id: i64,
    pub course_name: String,
    pub day: DayCode,
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
    #[serde(default)]
    pub place: String,
}

/// A caller's enrollment in a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEnrollment {
    pub caller: i64,
    pub schedule_id: i64,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// An assistant attached to one schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetAssistant {
    pub assistant_id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub line_id: Option<String>,
    pub schedule_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInformation {
    pub id: i64,
    pub schedule_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetAssignment {
    pub id: i64,
    pub schedule_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetGrade {
    pub caller: i64,
    pub assignment_id: i64,
    pub score: f64,
    pub updated_at: DateTime<Utc>,
}

impl Dataset {
    /// Read and parse a dataset file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|message| DatasetError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse dataset TOML
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_dataset() {
        let dataset = Dataset::parse(
            r#"
[[schedules]]
schedule_id = 10
course_name = "Algorithms"
day = 1
start = "08:00"
end = "09:40"

[[enrollments]]
caller = 1
schedule_id = 10
"#,
        )
        .unwrap();
        assert!(dataset.offered.is_empty());
        assert_eq!(dataset.schedules[0].place, "");
        assert!(dataset.enrollments[0].active);
        assert!(dataset.grades.is_empty());
    }

    #[test]
    fn test_parse_timestamps() {
        let dataset = Dataset::parse(
            r#"
[[grades]]
caller = 1
assignment_id = 5
score = 85.5
updated_at = "2026-10-01T00:00:00Z"
"#,
        )
        .unwrap();
        assert_eq!(dataset.grades[0].updated_at.timestamp(), 1790812800);
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(Dataset::parse("[[schedules]]\nschedule_id = \"x\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load("/nonexistent/portal.toml").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/portal.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.toml");
        fs::write(&path, "offered = [\"Networks\"]\n").unwrap();
        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.offered, vec!["Networks".to_string()]);
    }
}
