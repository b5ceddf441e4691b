//! Domain query adapters
//!
//! One adapter per routable intent. Each turns the caller identity and the
//! extracted filters into a narrowed read against the [`PortalStore`] and
//! returns the rows unshaped; deduplication belongs to the response shaper.
//!
//! Store failures are propagated unchanged. An empty result is not an error.

mod assignment;
mod assistant;
mod grade;
mod information;
mod schedule;

pub use assignment::lookup_assignments;
pub use assistant::lookup_assistants;
pub use grade::lookup_grades;
pub use information::lookup_information;
pub use schedule::lookup_schedules;

use crate::ports::portal_store::PortalStore;
use crate::use_cases::dispatch_query::DispatchQueryError;
use portal_bot_domain::{CallerId, DomainRecords, ExtractedFilters, Intent};

/// Run the adapter for `intent`. Returns `None` for [`Intent::Unknown`],
/// which has no adapter.
pub async fn lookup<S: PortalStore + ?Sized>(
    store: &S,
    intent: Intent,
    caller: CallerId,
    filters: &ExtractedFilters,
) -> Result<Option<DomainRecords>, DispatchQueryError> {
    let records = match intent {
        Intent::Assistant => {
            DomainRecords::Assistant(lookup_assistants(store, caller, filters).await?)
        }
        Intent::Information => {
            DomainRecords::Information(lookup_information(store, caller, filters).await?)
        }
        Intent::Schedule => DomainRecords::Schedule(lookup_schedules(store, caller, filters).await?),
        Intent::Assignment => {
            DomainRecords::Assignment(lookup_assignments(store, caller, filters).await?)
        }
        Intent::Grade => DomainRecords::Grade(lookup_grades(store, caller, filters).await?),
        Intent::Unknown => return Ok(None),
    };
    Ok(Some(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockStore, slot};

    #[tokio::test]
    async fn test_unknown_has_no_adapter() {
        let store = MockStore::default();
        let records = lookup(&store, Intent::Unknown, CallerId::new(1), &ExtractedFilters::default())
            .await
            .unwrap();
        assert!(records.is_none());
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_dispatches_by_intent() {
        let store = MockStore {
            schedules: vec![slot(1, "Algorithms", 1)],
            ..Default::default()
        };
        let records = lookup(&store, Intent::Schedule, CallerId::new(1), &ExtractedFilters::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(records.intent(), Intent::Schedule);
        assert_eq!(records.len(), 1);
    }
}
