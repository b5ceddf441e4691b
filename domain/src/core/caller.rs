//! Caller identity value object

use serde::{Deserialize, Serialize};

/// Identity of the authenticated user issuing a query (Value Object)
///
/// Resolved by the authorization layer before the bot sees the request.
/// Every lookup is scoped to it: a caller only ever sees their own schedule,
/// grades and assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(i64);

impl CallerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CallerId {
    fn from(id: i64) -> Self {
        CallerId::new(id)
    }
}
