//! Portal store port
//!
//! Defines the read-only lookups the dispatcher needs from the portal's
//! relational store. The storage schema is not prescribed; an adapter only has
//! to honor the narrowing contract of each lookup.
//!
//! # Narrowing contract
//!
//! Every filter argument is optional narrowing and filters combine
//! conjunctively:
//!
//! - `courses: None` → any course; `Some(p)` → course name matches `p`
//! - empty `days` → any day; otherwise the row's day is in the set
//! - `window: None` → any time; otherwise the row's instant is inside it

use async_trait::async_trait;
use portal_bot_domain::{
    AssignmentItem, AssistantContact, CallerId, CoursePattern, DaySet, Enrollment, GradeItem,
    InformationItem, Intent, ScheduleSlot, TimeWindow,
};
use thiserror::Error;

/// Errors that can occur during store reads
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Which course names a caller's utterance is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyScope {
    /// Courses the caller is enrolled in
    Enrolled,
    /// Every course the institution offers
    Offered,
}

impl VocabularyScope {
    /// Assistant lookups match course names against the full catalogue;
    /// everything else against the caller's own enrollment. The assistant
    /// rows themselves stay scoped to the caller's courses.
    pub fn for_intent(intent: Intent) -> Self {
        match intent {
            Intent::Assistant => VocabularyScope::Offered,
            _ => VocabularyScope::Enrolled,
        }
    }
}

/// Read-only access to portal data
///
/// Implementations (adapters) live in the infrastructure layer. Failures are
/// reported as-is; the dispatcher never retries.
#[async_trait]
pub trait PortalStore: Send + Sync {
    /// Course names for building the per-call course matcher
    async fn course_vocabulary(
        &self,
        caller: CallerId,
        scope: VocabularyScope,
    ) -> Result<Vec<String>, StoreError>;

    /// Assistants of the caller's actively enrolled courses, one row per
    /// (assistant, course) pair; `days` narrows by the day they are available
    async fn assistants_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        days: &DaySet,
    ) -> Result<Vec<AssistantContact>, StoreError>;

    /// The caller's enrollments in active class schedules
    async fn active_enrollments(&self, caller: CallerId) -> Result<Vec<Enrollment>, StoreError>;

    /// Information items attached to any of `schedule_ids`, narrowed by
    /// creation time
    async fn information_by_schedules(
        &self,
        schedule_ids: &[i64],
        window: Option<&TimeWindow>,
    ) -> Result<Vec<InformationItem>, StoreError>;

    /// The caller's class meetings
    async fn schedules_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        days: &DaySet,
    ) -> Result<Vec<ScheduleSlot>, StoreError>;

    /// Assignments visible to the caller, narrowed by due date
    async fn assignments_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<AssignmentItem>, StoreError>;

    /// The caller's recorded grades, narrowed by last-scored time
    async fn grades_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<GradeItem>, StoreError>;
}
