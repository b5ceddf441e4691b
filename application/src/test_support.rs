//! Shared test doubles for the application layer.

use crate::ports::portal_store::{PortalStore, StoreError, VocabularyScope};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use portal_bot_domain::{
    AssignmentItem, AssistantContact, CallerId, CoursePattern, DaySet, Enrollment, GradeItem,
    InformationItem, ScheduleSlot, TimeWindow,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Monday 2026-10-19, 10:00 at UTC+7
pub fn reference_now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-10-19T10:00:00+07:00").unwrap()
}

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

/// In-test store that applies the narrowing contract over canned rows and
/// records every call it receives.
#[derive(Default)]
pub struct MockStore {
    pub enrolled: Vec<String>,
    /// Courses each caller is enrolled in. Caller-scoped reads only return
    /// rows of those courses; an empty map leaves rows unscoped.
    pub enrolled_by: HashMap<CallerId, Vec<String>>,
    pub offered: Vec<String>,
    pub assistants: Vec<(AssistantContact, DaySet)>,
    pub enrollments: Vec<Enrollment>,
    pub information: HashMap<i64, Vec<InformationItem>>,
    pub schedules: Vec<ScheduleSlot>,
    pub assignments: Vec<AssignmentItem>,
    pub grades: Vec<GradeItem>,
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl MockStore {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(StoreError::ConnectionError("database is down".to_string()));
        }
        Ok(())
    }

    fn visible(&self, caller: CallerId, course_name: &str) -> bool {
        self.enrolled_by.is_empty()
            || self
                .enrolled_by
                .get(&caller)
                .is_some_and(|courses| courses.iter().any(|c| c == course_name))
    }
}

fn course_ok(pattern: Option<&CoursePattern>, name: &str) -> bool {
    pattern.is_none_or(|p| p.is_match(name))
}

fn window_ok(window: Option<&TimeWindow>, at: &DateTime<Utc>) -> bool {
    window.is_none_or(|w| w.contains(at))
}

fn pattern_str(pattern: Option<&CoursePattern>) -> String {
    pattern.map(|p| p.as_str().to_string()).unwrap_or_default()
}

#[async_trait]
impl PortalStore for MockStore {
    async fn course_vocabulary(
        &self,
        _caller: CallerId,
        scope: VocabularyScope,
    ) -> Result<Vec<String>, StoreError> {
        self.record(format!("vocabulary:{:?}", scope))?;
        Ok(match scope {
            VocabularyScope::Enrolled => self.enrolled.clone(),
            VocabularyScope::Offered => self.offered.clone(),
        })
    }

    async fn assistants_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        days: &DaySet,
    ) -> Result<Vec<AssistantContact>, StoreError> {
        self.record(format!("assistants:{}:{:?}", pattern_str(courses), days))?;
        Ok(self
            .assistants
            .iter()
            .filter(|(a, available)| {
                self.visible(caller, &a.course_name)
                    && course_ok(courses, &a.course_name)
                    && (days.is_empty() || !available.is_disjoint(days))
            })
            .map(|(a, _)| a.clone())
            .collect())
    }

    async fn active_enrollments(&self, caller: CallerId) -> Result<Vec<Enrollment>, StoreError> {
        self.record("enrollments".to_string())?;
        Ok(self
            .enrollments
            .iter()
            .filter(|e| self.visible(caller, &e.course_name))
            .cloned()
            .collect())
    }

    async fn information_by_schedules(
        &self,
        schedule_ids: &[i64],
        window: Option<&TimeWindow>,
    ) -> Result<Vec<InformationItem>, StoreError> {
        self.record(format!("information:{:?}", schedule_ids))?;
        Ok(schedule_ids
            .iter()
            .flat_map(|id| self.information.get(id).cloned().unwrap_or_default())
            .filter(|item| window_ok(window, &item.created_at))
            .collect())
    }

    async fn schedules_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        days: &DaySet,
    ) -> Result<Vec<ScheduleSlot>, StoreError> {
        self.record(format!("schedules:{}:{:?}", pattern_str(courses), days))?;
        Ok(self
            .schedules
            .iter()
            .filter(|s| self.visible(caller, &s.course_name))
            .filter(|s| course_ok(courses, &s.course_name))
            .filter(|s| days.is_empty() || days.contains(&s.day))
            .cloned()
            .collect())
    }

    async fn assignments_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<AssignmentItem>, StoreError> {
        self.record(format!("assignments:{}", pattern_str(courses)))?;
        Ok(self
            .assignments
            .iter()
            .filter(|a| self.visible(caller, &a.course_name))
            .filter(|a| course_ok(courses, &a.course_name) && window_ok(window, &a.due_date))
            .cloned()
            .collect())
    }

    async fn grades_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<GradeItem>, StoreError> {
        self.record(format!("grades:{}", pattern_str(courses)))?;
        Ok(self
            .grades
            .iter()
            .filter(|g| self.visible(caller, &g.course_name))
            .filter(|g| course_ok(courses, &g.course_name) && window_ok(window, &g.updated_at))
            .cloned()
            .collect())
    }
}

pub fn slot(id: i64, course: &str, day: u8) -> ScheduleSlot {
    ScheduleSlot {
        schedule_id: id,
        course_name: course.to_string(),
        day,
        start_minute: 480,
        end_minute: 580,
        place: format!("R{}", id),
    }
}

pub fn assistant(id: i64, name: &str, course: &str) -> AssistantContact {
    AssistantContact {
        assistant_id: id,
        name: name.to_string(),
        phone: None,
        line_id: Some(format!("line-{}", id)),
        course_name: course.to_string(),
    }
}

pub fn grade(assignment_id: i64, course: &str, score: f64, updated_at: &str) -> GradeItem {
    GradeItem {
        assignment_id,
        name: format!("Quiz {}", assignment_id),
        score,
        updated_at: utc(updated_at),
        course_name: course.to_string(),
    }
}

pub fn assignment(id: i64, course: &str, due: &str) -> AssignmentItem {
    AssignmentItem {
        id,
        name: format!("Task {}", id),
        description: None,
        due_date: utc(due),
        course_name: course.to_string(),
    }
}

pub fn info(id: i64, title: &str, created_at: &str) -> InformationItem {
    InformationItem {
        id,
        title: title.to_string(),
        description: Some(format!("{} details", title)),
        created_at: utc(created_at),
    }
}
