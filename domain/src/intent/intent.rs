//! Intent value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The domain a query is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Teaching-assistant contact details
    Assistant,
    /// Course announcements
    Information,
    /// Class timetable
    Schedule,
    /// Assignments and due dates
    Assignment,
    /// Recorded grades
    Grade,
    /// Text matched no trigger words
    Unknown,
}

impl Intent {
    /// Routable intents in tie-break priority order (first match wins)
    pub const PRIORITY: [Intent; 5] = [
        Intent::Assignment,
        Intent::Grade,
        Intent::Schedule,
        Intent::Assistant,
        Intent::Information,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Assistant => "assistant",
            Intent::Information => "information",
            Intent::Schedule => "schedule",
            Intent::Assignment => "assignment",
            Intent::Grade => "grade",
            Intent::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Intent::Unknown)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Intent {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "assistant" => Ok(Intent::Assistant),
            "information" | "info" => Ok(Intent::Information),
            "schedule" => Ok(Intent::Schedule),
            "assignment" => Ok(Intent::Assignment),
            "grade" => Ok(Intent::Grade),
            "unknown" => Ok(Intent::Unknown),
            other => Err(DomainError::UnknownIntent(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(Intent::PRIORITY[0], Intent::Assignment);
        assert_eq!(Intent::PRIORITY[4], Intent::Information);
        assert!(!Intent::PRIORITY.contains(&Intent::Unknown));
    }

    #[test]
    fn test_from_str_roundtrip() {
        for intent in Intent::PRIORITY {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
        assert_eq!("  Grade ".parse::<Intent>().unwrap(), Intent::Grade);
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        assert!(matches!(
            "weather".parse::<Intent>(),
            Err(DomainError::UnknownIntent(_))
        ));
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Intent::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
