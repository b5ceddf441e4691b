//! Portal store adapters
//!
//! [`InMemoryPortalStore`] serves the [`PortalStore`](portal_bot_application::PortalStore)
//! port from a TOML dataset loaded once at startup.

mod dataset;
mod in_memory;

pub use dataset::{
    Dataset, DatasetAssignment, DatasetAssistant, DatasetEnrollment, DatasetError, DatasetGrade,
    DatasetInformation, DatasetSchedule,
};
pub use in_memory::InMemoryPortalStore;
