//! Entity extractor
//!
//! Turns an utterance into [`ExtractedFilters`]. Extraction never fails: an
//! axis with no recognizable mention is simply left unconstrained.

use super::course_matcher::CourseMatcher;
use super::day::extract_days;
use super::filters::ExtractedFilters;
use super::time::extract_time_window;
use chrono::{DateTime, FixedOffset};
use tracing::debug;

/// Extracts day, time and course filters relative to a reference clock.
///
/// The reference instant is fixed at construction so that extraction is a
/// pure function of `(text, vocabulary, reference)`.
#[derive(Debug, Clone, Copy)]
pub struct EntityExtractor {
    reference: DateTime<FixedOffset>,
}

impl EntityExtractor {
    /// Create an extractor anchored at `reference` ("now")
    pub fn at(reference: DateTime<FixedOffset>) -> Self {
        Self { reference }
    }

    /// Extract filters from `text`, matching courses against `courses`.
    ///
    /// Any time window also contributes the weekdays it touches, so
    /// `days = explicit days ∪ weekdays implied by the window`. Mentioning a
    /// time without a day word therefore narrows to today's weekday.
    pub fn extract(&self, text: &str, courses: &CourseMatcher) -> ExtractedFilters {
        let mut days = extract_days(text);
        let time_window = extract_time_window(text, self.reference);
        if let Some(window) = &time_window {
            days.extend(window.weekdays());
        }
        let courses = courses.matches(text);

        let filters = ExtractedFilters::new(days, time_window, courses);
        debug!(
            days = ?filters.days(),
            window = ?filters.time_window().map(|w| w.to_string()),
            courses = ?filters.courses(),
            "Extracted filters"
        );
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DaySet;
    use std::collections::BTreeSet;

    /// Monday 2026-10-19, 10:00 at UTC+7
    fn extractor() -> EntityExtractor {
        EntityExtractor::at(DateTime::parse_from_rfc3339("2026-10-19T10:00:00+07:00").unwrap())
    }

    fn vocabulary() -> CourseMatcher {
        CourseMatcher::from_vocabulary(["Algorithms", "Databases"]).unwrap()
    }

    #[test]
    fn test_schedule_for_monday() {
        let filters = extractor().extract("schedule for monday", &vocabulary());
        assert_eq!(filters.days(), &DaySet::from([1]));
        assert!(filters.time_window().is_none());
        assert!(filters.courses().is_empty());
    }

    #[test]
    fn test_grade_in_databases() {
        let filters = extractor().extract("what's my grade in databases", &vocabulary());
        assert!(filters.days().is_empty());
        assert!(filters.time_window().is_none());
        assert_eq!(
            filters.courses(),
            &BTreeSet::from(["databases".to_string()])
        );
    }

    #[test]
    fn test_time_without_day_implies_today() {
        let filters = extractor().extract("who is available at 3pm", &vocabulary());
        assert_eq!(filters.days(), &DaySet::from([1]));
        assert!(filters.time_window().is_some());
    }

    #[test]
    fn test_tomorrow_moves_implied_day() {
        let filters = extractor().extract("classes tomorrow", &vocabulary());
        assert_eq!(filters.days(), &DaySet::from([2]));
    }

    #[test]
    fn test_explicit_days_union_implied_days() {
        let filters = extractor().extract("friday or this afternoon", &vocabulary());
        assert_eq!(filters.days(), &DaySet::from([1, 5]));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "algorithms schedule tomorrow morning";
        let first = extractor().extract(text, &vocabulary());
        let second = extractor().extract(text, &vocabulary());
        assert_eq!(first, second);
    }

    #[test]
    fn test_nothing_recognized_is_unconstrained() {
        let filters = extractor().extract("hello there", &CourseMatcher::empty());
        assert!(filters.is_unconstrained());
    }
}
