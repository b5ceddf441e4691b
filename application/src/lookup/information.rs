//! Information adapter
//!
//! Information items hang off class schedules, so the lookup is two reads:
//! resolve the caller's active schedules (narrowed by course), then fetch the
//! items of those schedules (narrowed by time window).

use crate::ports::portal_store::PortalStore;
use crate::use_cases::dispatch_query::DispatchQueryError;
use portal_bot_domain::{CallerId, ExtractedFilters, InformationItem};
use tracing::debug;

pub async fn lookup_information<S: PortalStore + ?Sized>(
    store: &S,
    caller: CallerId,
    filters: &ExtractedFilters,
) -> Result<Vec<InformationItem>, DispatchQueryError> {
    let courses = filters.course_pattern()?;
    let enrollments = store.active_enrollments(caller).await?;

    let schedule_ids: Vec<i64> = enrollments
        .iter()
        .filter(|e| courses.as_ref().is_none_or(|p| p.is_match(&e.course_name)))
        .map(|e| e.schedule_id)
        .collect();

    if schedule_ids.is_empty() {
        debug!("Caller {} has no matching active schedules", caller);
        return Ok(Vec::new());
    }

    let items = store
        .information_by_schedules(&schedule_ids, filters.time_window())
        .await?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockStore, info};
    use chrono::{DateTime, Duration};
    use portal_bot_domain::{Enrollment, TimeWindow};
    use std::collections::HashMap;

    fn store() -> MockStore {
        MockStore {
            enrollments: vec![
                Enrollment {
                    schedule_id: 10,
                    course_name: "Algorithms".to_string(),
                },
                Enrollment {
                    schedule_id: 20,
                    course_name: "Databases".to_string(),
                },
            ],
            information: HashMap::from([
                (10, vec![info(1, "Quiz moved", "2026-10-19T02:00:00Z")]),
                (20, vec![info(2, "Lab closed", "2026-09-01T02:00:00Z")]),
            ]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_all_active_schedules_without_filters() {
        let store = store();
        let items = lookup_information(&store, CallerId::new(1), &ExtractedFilters::default())
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(store.calls(), vec!["enrollments", "information:[10, 20]"]);
    }

    #[tokio::test]
    async fn test_course_narrows_schedules() {
        let store = store();
        let filters = ExtractedFilters::default().with_courses(["databases"]);
        let items = lookup_information(&store, CallerId::new(1), &filters)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Lab closed");
        assert_eq!(store.calls(), vec!["enrollments", "information:[20]"]);
    }

    #[tokio::test]
    async fn test_window_excludes_items_outside() {
        let start = DateTime::parse_from_rfc3339("2026-10-19T00:00:00+07:00").unwrap();
        let window = TimeWindow::starting_at(start, Duration::days(1)).unwrap();
        let filters = ExtractedFilters::default().with_time_window(window);
        let items = lookup_information(&store(), CallerId::new(1), &filters)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Quiz moved");
    }

    #[tokio::test]
    async fn test_no_matching_schedule_skips_second_read() {
        let store = store();
        let filters = ExtractedFilters::default().with_courses(["networks"]);
        let items = lookup_information(&store, CallerId::new(1), &filters)
            .await
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(store.calls(), vec!["enrollments"]);
    }
}
