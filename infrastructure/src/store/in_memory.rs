//! In-memory portal store
//!
//! Resolves a [`Dataset`] into domain records once, then answers every
//! lookup by filtering those records. Reads never fail after a successful
//! load.

use super::dataset::{Dataset, DatasetError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portal_bot_application::ports::portal_store::{PortalStore, StoreError, VocabularyScope};
use portal_bot_domain::calendar::parse_minute_of_day;
use portal_bot_domain::{
    AssignmentItem, AssistantContact, CallerId, CoursePattern, DayCode, DaySet, Enrollment,
    GradeItem, InformationItem, ScheduleSlot, TimeWindow, day_name,
};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;
use tracing::{debug, trace};

/// Read-only [`PortalStore`] over a resolved dataset
#[derive(Debug, Default)]
pub struct InMemoryPortalStore {
    offered: Vec<String>,
    schedules: BTreeMap<i64, ScheduleSlot>,
    /// `(caller, schedule_id, active)`
    enrollments: Vec<(CallerId, i64, bool)>,
    /// `(schedule_id, contact, day)` for the class the contact assists
    assistants: Vec<(i64, AssistantContact, DayCode)>,
    /// `(schedule_id, item)`
    information: Vec<(i64, InformationItem)>,
    /// `(schedule_id, item)`
    assignments: Vec<(i64, AssignmentItem)>,
    grades: Vec<(CallerId, GradeItem)>,
}

impl InMemoryPortalStore {
    /// Load and resolve a dataset file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let store = Self::from_dataset(Dataset::load(path)?)?;
        debug!(
            "Loaded dataset {} ({} schedules, {} enrollments)",
            path.display(),
            store.schedules.len(),
            store.enrollments.len()
        );
        Ok(store)
    }

    /// Resolve references between dataset tables.
    ///
    /// Fails on duplicate ids, dangling schedule or assignment references and
    /// slots that do not fit in one day.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, DatasetError> {
        let mut schedules = BTreeMap::new();
        for raw in dataset.schedules {
            let slot = resolve_slot(
                raw.schedule_id,
                raw.course_name,
                raw.day,
                &raw.start,
                &raw.end,
                raw.place,
            )?;
            if schedules.insert(slot.schedule_id, slot).is_some() {
                return Err(DatasetError::DuplicateId {
                    kind: "schedule",
                    id: raw.schedule_id,
                });
            }
        }

        let known = |kind: &'static str, id: i64, schedule_id: i64| {
            schedules
                .get(&schedule_id)
                .ok_or(DatasetError::UnknownSchedule {
                    kind,
                    id,
                    schedule_id,
                })
        };

        let mut enrollments = Vec::with_capacity(dataset.enrollments.len());
        for raw in dataset.enrollments {
            known("enrollment of caller", raw.caller, raw.schedule_id)?;
            enrollments.push((CallerId::new(raw.caller), raw.schedule_id, raw.active));
        }

        let mut assistants = Vec::with_capacity(dataset.assistants.len());
        for raw in dataset.assistants {
            let slot = known("assistant", raw.assistant_id, raw.schedule_id)?;
            let contact = AssistantContact {
                assistant_id: raw.assistant_id,
                name: raw.name,
                phone: raw.phone,
                line_id: raw.line_id,
                course_name: slot.course_name.clone(),
            };
            assistants.push((raw.schedule_id, contact, slot.day));
        }

        let mut information = Vec::with_capacity(dataset.information.len());
        for raw in dataset.information {
            known("information", raw.id, raw.schedule_id)?;
            let item = InformationItem {
                id: raw.id,
                title: raw.title,
                description: raw.description,
                created_at: raw.created_at,
            };
            information.push((raw.schedule_id, item));
        }
        // Newest first
        information.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));

        let mut assignments = Vec::with_capacity(dataset.assignments.len());
        let mut assignment_ids = HashSet::new();
        for raw in dataset.assignments {
            let slot = known("assignment", raw.id, raw.schedule_id)?;
            if !assignment_ids.insert(raw.id) {
                return Err(DatasetError::DuplicateId {
                    kind: "assignment",
                    id: raw.id,
                });
            }
            let item = AssignmentItem {
                id: raw.id,
                name: raw.name,
                description: raw.description,
                due_date: raw.due_date,
                course_name: slot.course_name.clone(),
            };
            assignments.push((raw.schedule_id, item));
        }
        assignments.sort_by_key(|(_, item)| item.due_date);

        let mut grades = Vec::with_capacity(dataset.grades.len());
        for raw in dataset.grades {
            let Some((_, assignment)) = assignments.iter().find(|(_, a)| a.id == raw.assignment_id)
            else {
                return Err(DatasetError::UnknownAssignment {
                    caller: raw.caller,
                    assignment_id: raw.assignment_id,
                });
            };
            let item = GradeItem {
                assignment_id: raw.assignment_id,
                name: assignment.name.clone(),
                score: raw.score,
                updated_at: raw.updated_at,
                course_name: assignment.course_name.clone(),
            };
            grades.push((CallerId::new(raw.caller), item));
        }

        let offered = if dataset.offered.is_empty() {
            schedules
                .values()
                .map(|slot| slot.course_name.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        } else {
            dataset.offered
        };

        Ok(Self {
            offered,
            schedules,
            enrollments,
            assistants,
            information,
            assignments,
            grades,
        })
    }

    /// Schedule ids of the caller's active enrollments
    fn enrolled_schedules(&self, caller: CallerId) -> BTreeSet<i64> {
        self.enrollments
            .iter()
            .filter(|(who, _, active)| *who == caller && *active)
            .map(|(_, schedule_id, _)| *schedule_id)
            .collect()
    }
}

fn resolve_slot(
    schedule_id: i64,
    course_name: String,
    day: DayCode,
    start: &str,
    end: &str,
    place: String,
) -> Result<ScheduleSlot, DatasetError> {
    let invalid = |reason: String| DatasetError::InvalidSlot {
        schedule_id,
        reason,
    };
    if day_name(day).is_none() {
        return Err(invalid(format!("day {} is not in 0..=6", day)));
    }
    let start_minute =
        parse_minute_of_day(start).ok_or_else(|| invalid(format!("bad start time '{}'", start)))?;
    let end_minute =
        parse_minute_of_day(end).ok_or_else(|| invalid(format!("bad end time '{}'", end)))?;
    if start_minute >= end_minute {
        return Err(invalid(format!("{} is not before {}", start, end)));
    }
    Ok(ScheduleSlot {
        schedule_id,
        course_name,
        day,
        start_minute,
        end_minute,
        place,
    })
}

fn course_ok(courses: Option<&CoursePattern>, course_name: &str) -> bool {
    courses.is_none_or(|pattern| pattern.is_match(course_name))
}

fn day_ok(days: &DaySet, day: DayCode) -> bool {
    days.is_empty() || days.contains(&day)
}

fn window_ok(window: Option<&TimeWindow>, instant: &DateTime<Utc>) -> bool {
    window.is_none_or(|w| w.contains(instant))
}

#[async_trait]
impl PortalStore for InMemoryPortalStore {
    async fn course_vocabulary(
        &self,
        caller: CallerId,
        scope: VocabularyScope,
    ) -> Result<Vec<String>, StoreError> {
        let vocabulary = match scope {
            VocabularyScope::Offered => self.offered.clone(),
            VocabularyScope::Enrolled => self
                .enrolled_schedules(caller)
                .iter()
                .filter_map(|id| self.schedules.get(id))
                .map(|slot| slot.course_name.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
        };
        trace!("Vocabulary {:?} of caller {}: {:?}", scope, caller, vocabulary);
        Ok(vocabulary)
    }

    async fn assistants_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        days: &DaySet,
    ) -> Result<Vec<AssistantContact>, StoreError> {
        let enrolled = self.enrolled_schedules(caller);
        Ok(self
            .assistants
            .iter()
            .filter(|(schedule_id, contact, day)| {
                enrolled.contains(schedule_id)
                    && course_ok(courses, &contact.course_name)
                    && day_ok(days, *day)
            })
            .map(|(_, contact, _)| contact.clone())
            .collect())
    }

    async fn active_enrollments(&self, caller: CallerId) -> Result<Vec<Enrollment>, StoreError> {
        Ok(self
            .enrolled_schedules(caller)
            .into_iter()
            .filter_map(|id| self.schedules.get(&id))
            .map(|slot| Enrollment {
                schedule_id: slot.schedule_id,
                course_name: slot.course_name.clone(),
            })
            .collect())
    }

    async fn information_by_schedules(
        &self,
        schedule_ids: &[i64],
        window: Option<&TimeWindow>,
    ) -> Result<Vec<InformationItem>, StoreError> {
        Ok(self
            .information
            .iter()
            .filter(|(schedule_id, item)| {
                schedule_ids.contains(schedule_id) && window_ok(window, &item.created_at)
            })
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn schedules_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        days: &DaySet,
    ) -> Result<Vec<ScheduleSlot>, StoreError> {
        let enrolled = self.enrolled_schedules(caller);
        let mut slots: Vec<ScheduleSlot> = self
            .schedules
            .values()
            .filter(|slot| enrolled.contains(&slot.schedule_id))
            .filter(|slot| course_ok(courses, &slot.course_name) && day_ok(days, slot.day))
            .cloned()
            .collect();
        slots.sort_by_key(|slot| (slot.day, slot.start_minute));
        Ok(slots)
    }

    async fn assignments_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<AssignmentItem>, StoreError> {
        let enrolled = self.enrolled_schedules(caller);
        Ok(self
            .assignments
            .iter()
            .filter(|(schedule_id, item)| {
                enrolled.contains(schedule_id)
                    && course_ok(courses, &item.course_name)
                    && window_ok(window, &item.due_date)
            })
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn grades_with_course(
        &self,
        caller: CallerId,
        courses: Option<&CoursePattern>,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<GradeItem>, StoreError> {
        Ok(self
            .grades
            .iter()
            .filter(|(who, item)| {
                *who == caller
                    && course_ok(courses, &item.course_name)
                    && window_ok(window, &item.updated_at)
            })
            .map(|(_, item)| item.clone())
            .collect())
    }
}
