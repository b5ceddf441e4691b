//! Application layer for portal-bot
//!
//! This crate contains the dispatch use case, the per-intent lookup adapters,
//! port definitions and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod lookup;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::DispatchConfig;
pub use ports::{
    clock::{Clock, FixedClock},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    portal_store::{PortalStore, StoreError, VocabularyScope},
};
pub use use_cases::dispatch_query::{
    DispatchQueryError, DispatchQueryInput, DispatchQueryOutput, DispatchQueryUseCase,
};
