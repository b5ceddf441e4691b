//! Logging infrastructure: structured conversation logging.
//!
//! Provides [`JsonlConversationLogger`], a JSONL file writer that implements
//! the [`ConversationLogger`](portal_bot_application::ConversationLogger) port,
//! and [`read_history`] to replay a caller's past exchanges from that file.

mod history;
mod jsonl_logger;

pub use history::{HistoryEntry, HistoryError, read_history};
pub use jsonl_logger::JsonlConversationLogger;
