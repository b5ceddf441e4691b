//! Assistant contact adapter

use crate::ports::portal_store::PortalStore;
use crate::use_cases::dispatch_query::DispatchQueryError;
use portal_bot_domain::{AssistantContact, CallerId, ExtractedFilters};

/// Assistants of the caller's courses, narrowed by course and availability day
pub async fn lookup_assistants<S: PortalStore + ?Sized>(
    store: &S,
    caller: CallerId,
    filters: &ExtractedFilters,
) -> Result<Vec<AssistantContact>, DispatchQueryError> {
    let courses = filters.course_pattern()?;
    let assistants = store
        .assistants_with_course(caller, courses.as_ref(), filters.days())
        .await?;
    Ok(assistants)
}
