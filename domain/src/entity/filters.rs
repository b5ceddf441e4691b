//! Extracted filters value object

use super::course_matcher::CoursePattern;
use crate::calendar::{DayCode, DaySet, TimeWindow};
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::BTreeSet;

/// Narrowing predicates extracted from one utterance (Value Object)
///
/// Each axis is independent and an empty axis means "no constraint",
/// never "match nothing". Filters combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFilters {
    days: DaySet,
    time_window: Option<TimeWindow>,
    courses: BTreeSet<String>,
}

impl ExtractedFilters {
    pub fn new(days: DaySet, time_window: Option<TimeWindow>, courses: BTreeSet<String>) -> Self {
        Self {
            days,
            time_window,
            courses,
        }
    }

    pub fn with_days(mut self, days: impl IntoIterator<Item = DayCode>) -> Self {
        self.days.extend(days);
        self
    }

    pub fn with_time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }

    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses.extend(courses.into_iter().map(Into::into));
        self
    }

    pub fn days(&self) -> &DaySet {
        &self.days
    }

    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }

    pub fn courses(&self) -> &BTreeSet<String> {
        &self.courses
    }

    /// True when no axis constrains the lookup
    pub fn is_unconstrained(&self) -> bool {
        self.days.is_empty() && self.time_window.is_none() && self.courses.is_empty()
    }

    /// Course axis as a narrowing pattern (`None` = unconstrained)
    pub fn course_pattern(&self) -> Result<Option<CoursePattern>, DomainError> {
        CoursePattern::from_courses(&self.courses)
    }
}
