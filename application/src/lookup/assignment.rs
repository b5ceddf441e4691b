//! Assignment adapter

use crate::ports::portal_store::PortalStore;
use crate::use_cases::dispatch_query::DispatchQueryError;
use portal_bot_domain::{AssignmentItem, CallerId, ExtractedFilters};

/// Assignments visible to the caller, narrowed by course and due-date window
pub async fn lookup_assignments<S: PortalStore + ?Sized>(
    store: &S,
    caller: CallerId,
    filters: &ExtractedFilters,
) -> Result<Vec<AssignmentItem>, DispatchQueryError> {
    let courses = filters.course_pattern()?;
    let assignments = store
        .assignments_with_course(caller, courses.as_ref(), filters.time_window())
        .await?;
    Ok(assignments)
}
