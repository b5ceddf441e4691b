//! Domain layer for portal-bot
//!
//! This crate contains the conversational query core: everything that is a
//! pure function of the user's text, the caller's course vocabulary and a
//! reference clock. It has no dependencies on storage or presentation.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! [`IntentRouter`] maps text to one of five domains (assignment, grade,
//! schedule, assistant, information) with ordered, first-match-wins keyword
//! rules. Text that matches nothing is tagged [`Intent::Unknown`].
//!
//! ## Extraction
//!
//! [`EntityExtractor`] pulls three independent filter axes out of the text:
//!
//! - **days**: day names and abbreviations, plus the weekdays any time
//!   window touches
//! - **time window**: clock times, parts of the day, relative days and weeks
//! - **courses**: names from a per-call [`CourseMatcher`]
//!
//! An empty axis means "no constraint", never "match nothing".
//!
//! ## Shaping
//!
//! [`shape`] flattens the [`DomainRecords`] of a lookup into
//! [`ResponseEntry`] values, collapsing repeated assistants into one entry.

pub mod calendar;
pub mod config;
pub mod core;
pub mod entity;
pub mod intent;
pub mod record;
pub mod response;

// Re-export commonly used types
pub use calendar::{DayCode, DaySet, TimeWindow, day_name};
pub use config::OutputFormat;
pub use core::{caller::CallerId, error::DomainError};
pub use entity::{CourseMatcher, CoursePattern, EntityExtractor, ExtractedFilters};
pub use intent::{Intent, IntentRouter, KeywordRule};
pub use record::{
    AssignmentItem, AssistantContact, DomainRecords, Enrollment, GradeItem, InformationItem,
    ScheduleSlot,
};
pub use response::{ResponseEntry, ResponseValue, shape};
