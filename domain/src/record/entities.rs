//! Domain records: read-only projections returned by the store.
//!
//! Records are created per query and discarded after shaping; the core never
//! mutates them.

use crate::calendar::DayCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One (assistant, course) pairing. An assistant linked to several courses
/// appears once per course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantContact {
    /// Identity code of the assistant; the dedup key when shaping
    pub assistant_id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub line_id: Option<String>,
    pub course_name: String,
}

/// An announcement attached to a class schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InformationItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A weekly class meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub schedule_id: i64,
    pub course_name: String,
    pub day: DayCode,
    /// Minute of day the class starts
    pub start_minute: u16,
    /// Minute of day the class ends
    pub end_minute: u16,
    pub place: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub course_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeItem {
    pub assignment_id: i64,
    pub name: String,
    pub score: f64,
    /// When the score was last recorded
    pub updated_at: DateTime<Utc>,
    pub course_name: String,
}

/// A caller's enrollment in a class schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub schedule_id: i64,
    pub course_name: String,
}
