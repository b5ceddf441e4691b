//! Intent classification.

pub mod intent;
pub mod router;

pub use intent::Intent;
pub use router::{IntentRouter, KeywordRule, default_keywords};
