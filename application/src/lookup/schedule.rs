//! Class schedule adapter

use crate::ports::portal_store::PortalStore;
use crate::use_cases::dispatch_query::DispatchQueryError;
use portal_bot_domain::{CallerId, ExtractedFilters, ScheduleSlot};

/// The caller's class meetings, narrowed by course and day
pub async fn lookup_schedules<S: PortalStore + ?Sized>(
    store: &S,
    caller: CallerId,
    filters: &ExtractedFilters,
) -> Result<Vec<ScheduleSlot>, DispatchQueryError> {
    let courses = filters.course_pattern()?;
    let slots = store
        .schedules_with_course(caller, courses.as_ref(), filters.days())
        .await?;
    Ok(slots)
}
