//! Grade adapter

use crate::ports::portal_store::PortalStore;
use crate::use_cases::dispatch_query::DispatchQueryError;
use portal_bot_domain::{CallerId, ExtractedFilters, GradeItem};

/// The caller's grades, narrowed by course and last-scored window
pub async fn lookup_grades<S: PortalStore + ?Sized>(
    store: &S,
    caller: CallerId,
    filters: &ExtractedFilters,
) -> Result<Vec<GradeItem>, DispatchQueryError> {
    let courses = filters.course_pattern()?;
    let grades = store
        .grades_with_course(caller, courses.as_ref(), filters.time_window())
        .await?;
    Ok(grades)
}
